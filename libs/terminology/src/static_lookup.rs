//! Table-backed [`Lookup`] implementation.

use crate::provider::Lookup;
use crate::systems::{self, v2_table, V2_TABLE_PREFIX};
use crate::tables::{
    v2_display_table, CANONICAL_SYSTEMS, NAMED_SYSTEMS, OID_SYSTEMS, V2_TABLE_OID_ARC,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use v2fhir_models::Coding;

static SHARED: Lazy<Arc<StaticLookup>> = Lazy::new(|| Arc::new(StaticLookup::default()));

/// Resolves systems, displays and units from built-in tables plus caller-supplied entries.
///
/// Caller entries always win over the built-in tables.
///
/// ```
/// use v2fhir_terminology::{Lookup, StaticLookup};
///
/// let lookup = StaticLookup::builder()
///     .system("LOCALMRN", "http://hospital.example.org/mrn")
///     .build();
///
/// assert_eq!(
///     lookup.resolve_system("localmrn").as_deref(),
///     Some("http://hospital.example.org/mrn")
/// );
/// assert_eq!(lookup.resolve_system("LN").as_deref(), Some("http://loinc.org"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    systems: HashMap<String, String>,
    displays: HashMap<(String, String), String>,
    units: HashMap<String, Coding>,
}

impl StaticLookup {
    pub fn builder() -> StaticLookupBuilder {
        StaticLookupBuilder::default()
    }

    /// Process-wide lookup holding only the built-in tables.
    pub fn shared() -> Arc<StaticLookup> {
        Arc::clone(&SHARED)
    }

    fn resolve_oid(oid: &str) -> Option<String> {
        if let Some(uri) = OID_SYSTEMS.get(oid) {
            return Some((*uri).to_string());
        }
        let table = oid.strip_prefix(V2_TABLE_OID_ARC)?;
        if is_table_number(table) {
            return Some(v2_table(table));
        }
        None
    }

    /// Canonical key for a table reference: the resolved URI, or the trimmed hint.
    /// A bare table number is accepted because the caller names a table.
    fn table_key(&self, table: &str) -> String {
        let table = table.trim();
        if table.len() == 4 && is_table_number(table) {
            return v2_table(table);
        }
        self.resolve_system(table)
            .unwrap_or_else(|| table.to_string())
    }
}

impl Lookup for StaticLookup {
    fn resolve_system(&self, hint: &str) -> Option<String> {
        let hint = hint.trim();
        if hint.is_empty() {
            return None;
        }
        let upper = hint.to_ascii_uppercase();

        if let Some(uri) = self.systems.get(&upper) {
            return Some(uri.clone());
        }

        let oid = hint.strip_prefix("urn:oid:").unwrap_or(hint);
        if let Some(uri) = Self::resolve_oid(oid) {
            return Some(uri);
        }

        if CANONICAL_SYSTEMS.contains(hint) {
            return Some(hint.to_string());
        }
        if let Some(table) = hint.strip_prefix(V2_TABLE_PREFIX) {
            return is_table_number(table).then(|| hint.to_string());
        }

        if let Some(uri) = NAMED_SYSTEMS.get(upper.as_str()) {
            return Some((*uri).to_string());
        }

        // A bare `nnnn` may be a local authority; only `HL7nnnn` names a table here.
        match upper.strip_prefix("HL7") {
            Some(table) if table.len() == 4 && is_table_number(table) => Some(v2_table(table)),
            _ => None,
        }
    }

    fn display_for(&self, code: &str, table: &str) -> Option<String> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        let key = self.table_key(table);

        if let Some(display) = self.displays.get(&(key.clone(), code.to_string())) {
            return Some(display.clone());
        }

        let number = systems::v2_table_number(&key)?;
        v2_display_table(number)?
            .get(code)
            .map(|display| (*display).to_string())
    }

    fn unit_for(&self, token: &str) -> Option<Coding> {
        let token = token.trim();
        if let Some(coding) = self.units.get(&token.to_ascii_uppercase()) {
            return Some(coding.clone());
        }
        match v2fhir_ucum::resolve(token) {
            Ok(unit) => Some(Coding::new(
                Some(systems::UCUM.to_string()),
                Some(unit.code.to_string()),
                Some(unit.display.to_string()),
            )),
            Err(err) => {
                tracing::debug!(token = %token, error = %err, "unit not resolved");
                None
            }
        }
    }
}

/// Builder for [`StaticLookup`].
#[derive(Debug, Default)]
pub struct StaticLookupBuilder {
    inner: StaticLookup,
}

impl StaticLookupBuilder {
    /// Maps a system name (matched case-insensitively) to a URI.
    pub fn system(mut self, name: impl Into<String>, uri: impl Into<String>) -> Self {
        let name = name.into().trim().to_ascii_uppercase();
        self.inner.systems.insert(name, uri.into());
        self
    }

    /// Adds a display for `code` in `table`. The table is resolved at build time, so
    /// `"0203"`, `"HL70203"` and the table URI all name the same table.
    pub fn display(
        mut self,
        table: impl Into<String>,
        code: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        let key = self.inner.table_key(&table.into());
        self.inner
            .displays
            .insert((key, code.into().trim().to_string()), display.into());
        self
    }

    /// Maps a unit token (matched case-insensitively) to a coding.
    pub fn unit(mut self, token: impl Into<String>, coding: Coding) -> Self {
        self.inner
            .units
            .insert(token.into().trim().to_ascii_uppercase(), coding);
        self
    }

    pub fn build(self) -> StaticLookup {
        self.inner
    }
}

fn is_table_number(s: &str) -> bool {
    !s.is_empty() && s.len() <= 4 && s.bytes().all(|b| b.is_ascii_digit())
}
