use rand::Rng;

/// Lowest normalised coordinate a target may be placed at
pub const TARGET_MIN: f64 = 0.2;
/// Highest normalised coordinate a target may be placed at
pub const TARGET_MAX: f64 = 0.8;

/// Fractional location of the target inside the play area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPosition {
    pub x: f64,
    pub y: f64,
}

impl TargetPosition {
    pub const CENTER: TargetPosition = TargetPosition { x: 0.5, y: 0.5 };

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(TARGET_MIN, TARGET_MAX),
            y: y.clamp(TARGET_MIN, TARGET_MAX),
        }
    }

    /// Independent uniform draw of both coordinates
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(TARGET_MIN..=TARGET_MAX),
            y: rng.gen_range(TARGET_MIN..=TARGET_MAX),
        }
    }

    pub fn in_bounds(&self) -> bool {
        (TARGET_MIN..=TARGET_MAX).contains(&self.x) && (TARGET_MIN..=TARGET_MAX).contains(&self.y)
    }
}

impl Default for TargetPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let pos = TargetPosition::random(&mut rng);
            assert!(pos.in_bounds(), "out of bounds: {pos:?}");
        }
    }

    #[test]
    fn test_random_is_not_constant() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = TargetPosition::random(&mut rng);
        let moved = (0..20).any(|_| TargetPosition::random(&mut rng) != first);
        assert!(moved);
    }

    #[test]
    fn test_new_clamps() {
        let pos = TargetPosition::new(0.0, 1.0);
        assert_eq!(pos, TargetPosition { x: 0.2, y: 0.8 });
        assert!(pos.in_bounds());
    }

    #[test]
    fn test_default_is_center() {
        assert_eq!(TargetPosition::default(), TargetPosition::CENTER);
        assert!(TargetPosition::CENTER.in_bounds());
    }
}
