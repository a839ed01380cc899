use eframe::egui::{Vec2, vec2};
use rand::Rng;

/// Uniform sample in `[from, to)`. Collapses to `from` when the range is empty.
pub fn rand_between<R: Rng + ?Sized>(rng: &mut R, from: f32, to: f32) -> f32 {
    if to > from {
        rng.gen_range(from..to)
    } else {
        from
    }
}

pub fn interpolate(from: Vec2, to: Vec2, by: f32) -> Vec2 {
    from * (1.0 - by) + to * by
}

pub fn polar(centre: Vec2, angle: f32, length: f32) -> Vec2 {
    centre + vec2(angle.cos(), angle.sin()) * length
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn rand_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = rand_between(&mut rng, -0.2, 0.2);
            assert!((-0.2..0.2).contains(&value));
        }
    }

    #[test]
    fn rand_between_empty_range_returns_lower_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(rand_between(&mut rng, 0.0, 0.0), 0.0);
        assert_eq!(rand_between(&mut rng, 3.0, 1.0), 3.0);
    }

    #[test]
    fn interpolate_endpoints_and_midpoint() {
        let from = vec2(0.0, 10.0);
        let to = vec2(20.0, -10.0);
        assert_eq!(interpolate(from, to, 0.0), from);
        assert_eq!(interpolate(from, to, 1.0), to);
        assert_eq!(interpolate(from, to, 0.5), vec2(10.0, 0.0));
    }

    #[test]
    fn polar_zero_angle_points_right() {
        let point = polar(vec2(1.0, 1.0), 0.0, 5.0);
        assert!((point.x - 6.0).abs() < 1e-5);
        assert!((point.y - 1.0).abs() < 1e-5);
    }
}
