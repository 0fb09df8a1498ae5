// 🍀 Lucky Numbers - Primary and secondary sets from name + birth numbers

use serde::{Deserialize, Serialize};

use crate::reduction::{reduce, Reduction};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyNumbers {
    /// Reduced values: name, birth, and their combined reduction
    pub primary: Vec<u64>,

    /// First-pass digit sums of the same three numbers
    pub secondary: Vec<u64>,
}

fn unique(values: [u64; 3]) -> Vec<u64> {
    let mut out = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// Derive both lucky-number sets. Duplicates collapse, first occurrence wins.
pub fn lucky_numbers(name: Reduction, birth: Reduction) -> LuckyNumbers {
    let combined = reduce(name.value + birth.value);

    LuckyNumbers {
        primary: unique([name.value, birth.value, combined.value]),
        secondary: unique([name.intermediate, birth.intermediate, combined.intermediate]),
    }
}
