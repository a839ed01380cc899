//! Animated radial tree diagram.
//!
//! [`layout`] places a fixed hierarchy in polar coordinates around a centre
//! point, and [`animation::AnimationDriver`] redraws it every frame while
//! packets travel from random leaves up to the root.

pub mod animation;
pub mod config;
pub mod graph;
pub mod headless;
pub mod layout;
pub mod surface;
pub mod util;
