/// Read-only view of campaign progress.
pub trait ProgressOracle: Send + Sync {
    /// Highest region index reached so far; the starting region is 0.
    fn highest_region(&self) -> u32;
}
