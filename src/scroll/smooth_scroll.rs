//! Exponential ease-out toward a scroll target.
//!
//! Each frame covers a fixed fraction of the remaining distance, so the strip
//! moves fast at first and decelerates into place.

/// Remaining distance at which the animation snaps to its target
const SETTLE_DISTANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    target: f64,
    /// Fraction of the remaining distance covered per frame
    speed: f64,
}

impl SmoothScroll {
    pub fn new(target: f64, speed: f64) -> Self {
        Self {
            target,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn retarget(&mut self, target: f64) {
        self.target = target;
    }

    /// Next offset after one frame, and whether the animation has settled
    pub fn step(&self, offset: f64) -> (f64, bool) {
        let next = offset + (self.target - offset) * self.speed;
        if (self.target - next).abs() <= SETTLE_DISTANCE {
            (self.target, true)
        } else {
            (next, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(SmoothScroll::new(10.0, 0.0).speed, 0.05);
        assert_eq!(SmoothScroll::new(10.0, 3.0).speed, 0.95);
    }

    #[test]
    fn test_step_moves_fraction_of_distance() {
        let anim = SmoothScroll::new(100.0, 0.5);
        let (next, settled) = anim.step(0.0);
        assert_eq!(next, 50.0);
        assert!(!settled);
    }

    #[test]
    fn test_step_snaps_near_target() {
        let anim = SmoothScroll::new(100.0, 0.5);
        let (next, settled) = anim.step(99.5);
        assert_eq!(next, 100.0);
        assert!(settled);
    }

    #[test]
    fn test_step_backwards() {
        let anim = SmoothScroll::new(0.0, 0.5);
        let (next, _) = anim.step(80.0);
        assert_eq!(next, 40.0);
    }

    #[test]
    fn test_always_settles() {
        let anim = SmoothScroll::new(300.0, 0.35);
        let mut offset = 0.0;
        let mut frames = 0;
        loop {
            let (next, settled) = anim.step(offset);
            offset = next;
            frames += 1;
            if settled {
                break;
            }
            assert!(frames < 100, "animation never settled");
        }
        assert_eq!(offset, 300.0);
    }
}
