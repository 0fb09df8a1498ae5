// 🔢 Numerology Reducer - Digit-sum reduction with master numbers
//
//   value:        repeated digit sum until <= 9, 11 or 22
//   intermediate: digit sum taken exactly once
//
// Every number in a reading (name, birth, lucky numbers) goes through here.

use serde::{Deserialize, Serialize};

use crate::tables::gematria;
use crate::transliteration::transliterate;
use crate::validation::BirthDate;

pub const MASTER_NUMBERS: [u64; 2] = [11, 22];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    /// Fully reduced value (1-9, 11 or 22; 0 only for input 0)
    pub value: u64,

    /// First-pass digit sum of the input
    pub intermediate: u64,
}

pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

pub fn is_master(n: u64) -> bool {
    MASTER_NUMBERS.contains(&n)
}

fn is_reduced(n: u64) -> bool {
    n <= 9 || is_master(n)
}

pub fn reduce(n: u64) -> Reduction {
    let intermediate = digit_sum(n);

    let mut value = n;
    while !is_reduced(value) {
        value = digit_sum(value);
    }

    Reduction { value, intermediate }
}

// ============================================================================
// PRODUCERS
// ============================================================================

/// Name number plus the Hebrew spelling and gematria total it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameNumber {
    pub hebrew: String,
    pub gematria: u64,
    pub reduction: Reduction,
}

pub fn name_number(name: &str) -> NameNumber {
    let hebrew = transliterate(name);
    let total = u64::from(gematria(&hebrew));

    NameNumber {
        reduction: reduce(total),
        gematria: total,
        hebrew,
    }
}

/// Birth number: every digit of the date summed, then reduced
pub fn birth_number(birth: &BirthDate) -> Reduction {
    let total: u64 = birth.digits().map(u64::from).sum();
    reduce(total)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_birth_date;

    #[test]
    fn test_master_numbers_stay() {
        assert_eq!(reduce(11).value, 11);
        assert_eq!(reduce(22).value, 22);
    }

    #[test]
    fn test_two_step_reduction() {
        // 1+9 = 10 -> 1+0 = 1
        let r = reduce(19);
        assert_eq!(r.value, 1);
        assert_eq!(r.intermediate, 10);
    }

    #[test]
    fn test_reduction_stops_at_master_on_the_way() {
        // 2+9 = 11
        assert_eq!(reduce(29).value, 11);
        // 7+3+1 = 11
        assert_eq!(reduce(731).value, 11);
        // 9+4+9 = 22
        assert_eq!(reduce(949).value, 22);
    }

    #[test]
    fn test_small_numbers_unchanged() {
        for n in 0..=9 {
            assert_eq!(reduce(n).value, n);
            assert_eq!(reduce(n).intermediate, n);
        }
    }

    #[test]
    fn test_idempotent_at_fixed_points() {
        for n in 0..10_000 {
            let once = reduce(n).value;
            assert_eq!(reduce(once).value, once, "n = {}", n);
            assert!(once <= 9 || is_master(once), "n = {} -> {}", n, once);
        }
    }

    #[test]
    fn test_large_input() {
        assert_eq!(reduce(u64::MAX).intermediate, 87);
        assert!(reduce(u64::MAX).value <= 9);
    }

    #[test]
    fn test_name_number_ana() {
        let n = name_number("Ana");
        assert_eq!(n.hebrew, "אנא");
        assert_eq!(n.gematria, 52);
        assert_eq!(n.reduction, Reduction { value: 7, intermediate: 7 });

        // Pure: same input, same output
        assert_eq!(name_number("Ana"), n);
    }

    #[test]
    fn test_name_number_maria_santos() {
        let n = name_number("Maria Santos");
        assert_eq!(n.gematria, 893);
        assert_eq!(n.reduction, Reduction { value: 2, intermediate: 20 });
    }

    #[test]
    fn test_birth_number() {
        // 0+2+0+3+1+9+8+2 = 25 -> 7
        let birth = validate_birth_date("02/03/1982").unwrap();
        assert_eq!(birth_number(&birth).value, 7);

        println!("✅ Birth number test passed");
    }
}
