//! Mod-11 check digit computation and validation.
//!
//! Both check digits use the same scheme: a positional weighted sum of the
//! preceding digits, reduced modulo 11. A remainder of 2 or less yields
//! `0`, any other remainder `r` yields `11 - r`.

use tracing::trace;

use super::error::CpfError;

/// Number of base digits before the check digits.
pub const BASE_LEN: usize = 9;

/// Total number of digits in a full CPF.
pub const CPF_LEN: usize = BASE_LEN + 2;

/// Weights for the first check digit, applied to the 9 base digits.
const FIRST_WEIGHTS: [u32; BASE_LEN] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, applied to the base digits plus the
/// first check digit.
const SECOND_WEIGHTS: [u32; BASE_LEN + 1] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    debug_assert_eq!(digits.len(), weights.len());
    let total: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    let rest = total % 11;
    if rest > 2 { (11 - rest) as u8 } else { 0 }
}

/// Compute both check digits for a base of 9 digit values (each `0..=9`).
pub(crate) fn check_digits_for(base: &[u8; BASE_LEN]) -> [u8; 2] {
    let first = check_digit(base, &FIRST_WEIGHTS);

    let mut extended = [0u8; BASE_LEN + 1];
    extended[..BASE_LEN].copy_from_slice(base);
    extended[BASE_LEN] = first;
    let second = check_digit(&extended, &SECOND_WEIGHTS);

    [first, second]
}

/// Render 9 base digit values and their check digits as an 11-digit string.
pub(crate) fn render(base: &[u8; BASE_LEN]) -> String {
    let [first, second] = check_digits_for(base);
    base.iter()
        .chain([first, second].iter())
        .map(|&d| char::from(b'0' + d))
        .collect()
}

/// Parse exactly 9 ASCII digits into digit values.
pub(crate) fn parse_base(argument: &'static str, digits: &str) -> Result<[u8; BASE_LEN], CpfError> {
    if digits.is_empty() {
        return Err(CpfError::invalid(argument, "must not be empty"));
    }

    let len = digits.chars().count();
    if len != BASE_LEN {
        return Err(CpfError::invalid(
            argument,
            format!("expected {BASE_LEN} digits, got {len}"),
        ));
    }

    let mut base = [0u8; BASE_LEN];
    for (slot, c) in base.iter_mut().zip(digits.chars()) {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| CpfError::invalid(argument, format!("non-digit character '{c}'")))?;
        *slot = digit as u8;
    }
    Ok(base)
}

/// Append the two check digits to a 9-digit partial CPF.
///
/// Returns the full 11-digit CPF. Fails with
/// [`CpfError::InvalidArgument`] when `digits` is empty, is not exactly 9
/// characters long, or contains anything other than ASCII digits.
///
/// ```rust
/// assert_eq!(cpf::compute_check_digits("312496070").unwrap(), "31249607000");
/// ```
pub fn compute_check_digits(digits: &str) -> Result<String, CpfError> {
    let base = parse_base("digits", digits)?;
    Ok(render(&base))
}

/// Check whether `cpf` carries the check digits its first 9 digits imply.
///
/// An empty string is an argument error. Any other malformed input, such
/// as the wrong length or a non-digit character, is `Ok(false)`.
///
/// ```rust
/// assert!(cpf::validate("31249607000").unwrap());
/// assert!(!cpf::validate("31249607001").unwrap());
/// assert!(!cpf::validate("312496070").unwrap());
/// assert!(cpf::validate("").is_err());
/// ```
pub fn validate(cpf: &str) -> Result<bool, CpfError> {
    if cpf.is_empty() {
        return Err(CpfError::invalid("cpf", "must not be empty"));
    }

    if cpf.len() != CPF_LEN {
        trace!(len = cpf.len(), "cpf rejected: wrong length");
        return Ok(false);
    }

    if !cpf.bytes().all(|b| b.is_ascii_digit()) {
        trace!("cpf rejected: non-digit character");
        return Ok(false);
    }

    let base = parse_base("cpf", &cpf[..BASE_LEN])?;
    let valid = render(&base) == cpf;
    if !valid {
        trace!("cpf rejected: check digits do not match");
    }
    Ok(valid)
}

/// Convenience wrapper over [`validate`] that treats every error as invalid.
pub fn is_valid(cpf: &str) -> bool {
    validate(cpf).unwrap_or(false)
}
