/// Oracle exposing the species catalog data progression needs.
pub trait SpeciesOracle: Send + Sync {
    /// Cumulative experience thresholds for the species' leveling type.
    ///
    /// `curve[i]` is the total experience required to advance past level
    /// `i`; a member sits at level `L` while `exp < curve[L]`. `None` for
    /// a species missing from the catalog, which freezes the member at
    /// its current level rather than failing.
    fn exp_curve(&self, species: &str) -> Option<&[u64]>;
}
