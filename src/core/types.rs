use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::check_digits::{self, BASE_LEN, CPF_LEN};
use super::error::CpfError;

/// A CPF whose check digits are known to be correct.
///
/// The value is stored as its bare 11 digits. Masked forms such as
/// `312.496.070-00` are not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse and validate an 11-digit CPF.
    pub fn parse(value: &str) -> Result<Self, CpfError> {
        if check_digits::validate(value)? {
            return Ok(Self(value.to_owned()));
        }

        let len = value.chars().count();
        let reason = if len != CPF_LEN {
            format!("expected {CPF_LEN} digits, got {len}")
        } else if !value.bytes().all(|b| b.is_ascii_digit()) {
            "contains non-digit characters".to_owned()
        } else {
            "check digits do not match".to_owned()
        };
        Err(CpfError::invalid("cpf", reason))
    }

    /// Build a CPF from its 9 base digits by computing the check digits.
    pub fn from_base(digits: &str) -> Result<Self, CpfError> {
        check_digits::compute_check_digits(digits).map(Self)
    }

    pub(crate) fn from_base_digits(base: &[u8; BASE_LEN]) -> Self {
        Self(check_digits::render(base))
    }

    /// The full 11 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 9 base digits.
    pub fn base(&self) -> &str {
        &self.0[..BASE_LEN]
    }

    /// The 2 check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[BASE_LEN..]
    }

    /// Consume the value, returning the 11 digits.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if check_digits::validate(&value)? {
            Ok(Self(value))
        } else {
            Self::parse(&value)
        }
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}
