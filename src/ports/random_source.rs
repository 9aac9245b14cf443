//! Random Source Port - Randomness for failure injection and id allocation.

/// Port for drawing random numbers.
///
/// Implementations must be shareable across tasks; draws take `&self`.
pub trait RandomSource: Send + Sync {
    /// Uniform sample from `[0, 1)`.
    fn next_unit(&self) -> f64;

    /// Uniform integer from `[0, bound)`. `bound` must be non-zero.
    fn next_below(&self, bound: u32) -> u32;
}
