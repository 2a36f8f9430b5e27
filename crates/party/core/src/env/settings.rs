/// Read-only view of global settings and challenge-mode flags.
pub trait SettingsOracle: Send + Sync {
    /// Challenge flag disabling protein use entirely.
    fn disable_proteins(&self) -> bool;

    /// Display preference hiding maxed-out members from protein listings.
    fn hide_maxed_from_protein_list(&self) -> bool;
}
