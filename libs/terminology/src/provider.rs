use v2fhir_models::Coding;

/// Provides code-system resolution to the datatype converter.
///
/// Implementations range from the built-in [`StaticLookup`](crate::StaticLookup) to
/// site-specific tables or a remote terminology service fronted by a local cache.
/// Every method is total and must not panic: `None` means the mapping is unknown.
pub trait Lookup: Send + Sync {
    /// Map a system hint (coding-system name, HL7 table, OID, or URI) to its canonical URI.
    ///
    /// Returns `None` when the hint is not a known system. Callers keep the raw hint in that case.
    fn resolve_system(&self, hint: &str) -> Option<String>;

    /// Display text of `code` in `table`, where `table` is anything `resolve_system` accepts.
    fn display_for(&self, code: &str, table: &str) -> Option<String>;

    /// Canonical unit coding for a free-text unit token.
    fn unit_for(&self, token: &str) -> Option<Coding>;
}
