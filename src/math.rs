//! Factorial with an explicit overflow policy.
//!
//! Results are `u128`. Inputs outside `0..=MAX_FACTORIAL_INPUT` are rejected
//! before any recursion happens.

/// Largest `n` whose factorial fits in a `u128` (34! ~ 2.95e38).
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Why a factorial could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorialError {
    Negative(i64),
    Overflow(i64),
}

impl std::fmt::Display for FactorialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative(n) => write!(f, "factorial of negative number {} is undefined", n),
            Self::Overflow(n) => write!(
                f,
                "factorial of {} overflows u128 (max input is {})",
                n, MAX_FACTORIAL_INPUT
            ),
        }
    }
}

impl std::error::Error for FactorialError {}

/// Compute `n!` recursively.
pub fn factorial(n: i64) -> Result<u128, FactorialError> {
    if n < 0 {
        return Err(FactorialError::Negative(n));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(FactorialError::Overflow(n));
    }
    factorial_rec(n as u32).ok_or(FactorialError::Overflow(n))
}

fn factorial_rec(n: u32) -> Option<u128> {
    if n == 0 {
        return Some(1);
    }
    factorial_rec(n - 1)?.checked_mul(u128::from(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_base_case() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
    }

    #[test]
    fn test_factorial_of_five() {
        assert_eq!(factorial(5), Ok(120));
    }

    #[test]
    fn test_factorial_recurrence() {
        for n in 1..=MAX_FACTORIAL_INPUT {
            let prev = factorial(n - 1).unwrap();
            assert_eq!(factorial(n).unwrap(), n as u128 * prev, "n = {}", n);
        }
    }

    #[test]
    fn test_factorial_upper_bound() {
        assert_eq!(
            factorial(34),
            Ok(295_232_799_039_604_140_847_618_609_643_520_000_000)
        );
        assert_eq!(factorial(35), Err(FactorialError::Overflow(35)));
        assert_eq!(factorial(i64::MAX), Err(FactorialError::Overflow(i64::MAX)));
    }

    #[test]
    fn test_factorial_negative() {
        assert_eq!(factorial(-1), Err(FactorialError::Negative(-1)));
        assert_eq!(factorial(i64::MIN), Err(FactorialError::Negative(i64::MIN)));
    }

    #[test]
    fn test_error_display() {
        let msg = FactorialError::Overflow(40).to_string();
        assert!(msg.contains("40"));
        assert!(msg.contains("max input is 34"));
        assert!(FactorialError::Negative(-3).to_string().contains("-3"));
    }
}
