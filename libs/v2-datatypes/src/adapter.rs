//! Type adapter: resolves choice-typed wrappers to their concrete payload.

use crate::v2::V2Type;

/// Concrete value behind `value`, or `None` for an unresolved choice wrapper.
pub fn adjust(value: &V2Type) -> Option<&V2Type> {
    match value {
        V2Type::Varies(v) => v.data.as_deref().and_then(adjust),
        other => Some(other),
    }
}

/// Concrete value at `index`. Out-of-range indexes yield `None`.
pub fn adjust_at(values: &[V2Type], index: usize) -> Option<&V2Type> {
    values.get(index).and_then(adjust)
}

/// Trimmed, non-blank text of the primitive at `index`.
pub(crate) fn text_at(values: &[V2Type], index: usize) -> Option<String> {
    match adjust_at(values, index)? {
        V2Type::Primitive(p) => p
            .value
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

/// Trimmed, non-blank generic text of the component at `index`, composite or not.
pub(crate) fn string_at(values: &[V2Type], index: usize) -> Option<String> {
    adjust_at(values, index)
        .and_then(V2Type::text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
