use rand::Rng;

/// The random draws scene construction needs.
///
/// Every consumer takes the source by `&mut`, so a seeded generator yields the
/// same scene on every run. Any [`rand::Rng`] is a source.
pub trait RandomSource {
    /// Uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// `true` with probability one half.
    fn coin_flip(&mut self) -> bool;

    /// Uniform in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    #[inline]
    fn coin_flip(&mut self) -> bool {
        self.random_bool(0.5)
    }

    #[inline]
    fn below(&mut self, n: u32) -> u32 {
        self.random_range(0..n)
    }
}
