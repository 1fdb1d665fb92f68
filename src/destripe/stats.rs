//! Online mean/variance accumulator

/// Running mean and standard deviation over a stream of samples.
///
/// Each statistical window gets its own accumulator (or an explicit
/// `reset`); instances are never shared between windows. Statistics are
/// undefined until at least one sample has been folded in, which callers
/// guarantee before reading them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanStd {
    sum: f64,
    sum2: f64,
    n: u64,
}

impl MeanStd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.sum2 += value * value;
        self.n += 1;
    }

    pub fn count(&self) -> u64 {
        self.n
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.n as f64
    }

    /// Population variance, clamped at zero since the two-pass identity can
    /// come out slightly negative from floating-point cancellation.
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        (self.sum2 / self.n as f64 - mean * mean).max(0.0)
    }

    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_stddev_of_known_samples() {
        let mut m = MeanStd::new();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            m.add(v);
        }
        assert_eq!(m.count(), 8);
        assert!((m.mean() - 5.0).abs() < 1e-12);
        assert!((m.stddev() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn variance_never_negative_on_constant_input() {
        let mut m = MeanStd::new();
        for _ in 0..1000 {
            m.add(150.3333333333);
        }
        assert!(m.variance() >= 0.0);
        assert_eq!(m.stddev(), m.variance().sqrt());
    }

    #[test]
    fn reset_clears_state() {
        let mut m = MeanStd::new();
        m.add(10.0);
        m.add(20.0);
        m.reset();
        assert_eq!(m.count(), 0);
        m.add(3.0);
        assert!((m.mean() - 3.0).abs() < 1e-12);
    }
}
