// 🧭 Trait & Path Resolver - Turns lucky numbers into table entries
// A missing entry is reported per number, never as a failure of the reading

use serde::Serialize;

use crate::reduction::reduce;
use crate::tables::{is_path_number, number_trait, path_definition, NumberTrait, PathDefinition};

/// Association for a primary number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryAssociation {
    pub number: u64,
    pub traits: Option<&'static NumberTrait>,
}

/// Association for a secondary number: a tree-of-life path, or the traits of
/// its reduced value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SecondaryAssociation {
    Path {
        number: u64,
        path: &'static PathDefinition,
    },
    Reduced {
        number: u64,
        reduced: u64,
        traits: Option<&'static NumberTrait>,
    },
}

impl SecondaryAssociation {
    pub fn number(&self) -> u64 {
        match self {
            SecondaryAssociation::Path { number, .. } => *number,
            SecondaryAssociation::Reduced { number, .. } => *number,
        }
    }
}

fn lookup_trait(number: u64) -> Option<&'static NumberTrait> {
    u32::try_from(number).ok().and_then(number_trait)
}

fn lookup_path(number: u64) -> Option<&'static PathDefinition> {
    let n = u32::try_from(number).ok()?;
    if is_path_number(n) {
        path_definition(n)
    } else {
        None
    }
}

pub fn resolve_primary(number: u64) -> PrimaryAssociation {
    PrimaryAssociation {
        number,
        traits: lookup_trait(number),
    }
}

pub fn resolve_secondary(number: u64) -> SecondaryAssociation {
    match lookup_path(number) {
        Some(path) => SecondaryAssociation::Path { number, path },
        None => {
            let reduced = reduce(number).value;
            SecondaryAssociation::Reduced {
                number,
                reduced,
                traits: lookup_trait(reduced),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_single_digit_has_traits() {
        let assoc = resolve_primary(7);
        assert_eq!(assoc.traits.map(|t| t.gemstone), Some("Ametista"));
    }

    #[test]
    fn test_primary_master_number_unmapped() {
        assert!(resolve_primary(11).traits.is_none());
        assert!(resolve_primary(22).traits.is_none());
    }

    #[test]
    fn test_secondary_in_path_range() {
        match resolve_secondary(20) {
            SecondaryAssociation::Path { number, path } => {
                assert_eq!(number, 20);
                assert_eq!(path.letter, "Yud (י)");
            }
            other => panic!("expected path, got {:?}", other),
        }
    }

    #[test]
    fn test_secondary_below_range_uses_traits() {
        match resolve_secondary(4) {
            SecondaryAssociation::Reduced { reduced, traits, .. } => {
                assert_eq!(reduced, 4);
                assert_eq!(traits.map(|t| t.element), Some("Terra"));
            }
            other => panic!("expected traits, got {:?}", other),
        }
    }

    #[test]
    fn test_secondary_above_range_is_reduced() {
        // 38 -> 11, which has no traits
        match resolve_secondary(38) {
            SecondaryAssociation::Reduced { reduced, traits, .. } => {
                assert_eq!(reduced, 11);
                assert!(traits.is_none());
            }
            other => panic!("expected reduction, got {:?}", other),
        }
        assert_eq!(resolve_secondary(47).number(), 47);
    }
}
