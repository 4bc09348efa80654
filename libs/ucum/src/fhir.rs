use crate::UCUM_SYSTEM;
use std::cmp::Ordering;

/// Orders candidate unit codings by their system: UCUM first, then by system URI.
///
/// Codings without a system sort before any named non-UCUM system.
pub fn compare_unit_systems(lhs: Option<&str>, rhs: Option<&str>) -> Ordering {
    let rank = |s: Option<&str>| s != Some(UCUM_SYSTEM);
    rank(lhs).cmp(&rank(rhs)).then_with(|| lhs.cmp(&rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ucum_always_wins() {
        assert_eq!(compare_unit_systems(Some(UCUM_SYSTEM), Some("A")), Ordering::Less);
        assert_eq!(compare_unit_systems(Some("A"), Some(UCUM_SYSTEM)), Ordering::Greater);
        assert_eq!(compare_unit_systems(None, Some(UCUM_SYSTEM)), Ordering::Greater);
    }

    #[test]
    fn others_sort_lexically() {
        assert_eq!(compare_unit_systems(Some("ANSI"), Some("ISO+")), Ordering::Less);
        assert_eq!(compare_unit_systems(None, Some("ANSI")), Ordering::Less);
    }
}
