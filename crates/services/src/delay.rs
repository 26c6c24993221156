use rand::{Rng, rng};

/// Source of the randomized "get ready" delay.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DelaySampler {
    /// Uniform draw from the thread-local RNG.
    #[default]
    Uniform,
    /// Always returns the given number of seconds. Used by tests.
    Fixed(f64),
}

impl DelaySampler {
    /// Draw a delay in seconds from `[lo, hi)`.
    ///
    /// An empty or inverted range collapses to `lo`. A fixed delay is
    /// returned as is.
    #[must_use]
    pub fn sample(&self, lo: f64, hi: f64) -> f64 {
        match self {
            DelaySampler::Uniform if lo < hi => rng().random_range(lo..hi),
            DelaySampler::Uniform => lo,
            DelaySampler::Fixed(secs) => *secs,
        }
    }
}
