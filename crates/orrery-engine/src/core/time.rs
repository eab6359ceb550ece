/// Variable-timestep frame clock.
///
/// The host's wall-clock delta is consumed directly each frame; there is no
/// accumulator and no catch-up stepping. Negative or non-finite deltas
/// (tab resume glitches, clock skew) count as zero.
#[derive(Debug, Clone, Default)]
pub struct FrameTime {
    delta: f32,
    elapsed: f64,
    frame: u64,
}

impl FrameTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame with the host-reported delta (seconds).
    pub fn advance(&mut self, frame_dt: f32) {
        self.delta = if frame_dt.is_finite() && frame_dt > 0.0 {
            frame_dt
        } else {
            0.0
        };
        self.elapsed += self.delta as f64;
        self.frame += 1;
    }

    /// Delta of the current frame in seconds (always >= 0).
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Total time consumed since start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_passes_through() {
        let mut t = FrameTime::new();
        t.advance(0.25);
        assert_eq!(t.delta(), 0.25);
        t.advance(1.5); // long frame is not split or capped
        assert_eq!(t.delta(), 1.5);
        assert!((t.elapsed() - 1.75).abs() < 1e-9);
        assert_eq!(t.frame(), 2);
    }

    #[test]
    fn bad_deltas_count_as_zero() {
        let mut t = FrameTime::new();
        t.advance(-0.1);
        assert_eq!(t.delta(), 0.0);
        t.advance(f32::NAN);
        assert_eq!(t.delta(), 0.0);
        t.advance(f32::INFINITY);
        assert_eq!(t.delta(), 0.0);
        assert_eq!(t.elapsed(), 0.0);
        assert_eq!(t.frame(), 3);
    }
}
