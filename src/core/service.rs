use tracing::debug;

use super::check_digits::{self, BASE_LEN};
use super::error::CpfError;
use super::random::DigitSource;
use super::types::Cpf;

/// CPF operations behind a substitutable interface.
///
/// Arguments are `Option<&str>` so callers holding possibly-absent input
/// (a missing form field, a nullable column) get a
/// [`CpfError::NullArgument`] instead of having to special-case it.
///
/// The trait is object-safe; `Box<dyn CpfService>` works for runtime
/// substitution in tests.
pub trait CpfService: Send + Sync {
    /// Check whether `cpf` carries correct check digits.
    ///
    /// Absent input is [`CpfError::NullArgument`], empty input is
    /// [`CpfError::InvalidArgument`]. A length other than 11 is `Ok(false)`.
    fn validate(&self, cpf: Option<&str>) -> Result<bool, CpfError>;

    /// Generate a random valid CPF.
    fn generate(&self) -> String {
        self.generate_cpf().into_string()
    }

    /// Append the two check digits to 9 base digits.
    ///
    /// Absent input is [`CpfError::NullArgument`]. Empty input, a length
    /// other than 9 or a non-digit character is
    /// [`CpfError::InvalidArgument`].
    fn compute_check_digits(&self, digits: Option<&str>) -> Result<String, CpfError>;

    /// Generate a random valid CPF as a typed value.
    fn generate_cpf(&self) -> Cpf;
}

/// The standard [`CpfService`], drawing generated digits from `S`.
///
/// # Example
///
/// ```rust
/// use cpf::{CpfService, FixedDigitSource, StandardCpfService};
///
/// let service = StandardCpfService::with_source(FixedDigitSource::from_digits("312496070"));
/// assert_eq!(service.generate(), "31249607000");
/// assert!(service.validate(Some("31249607000")).unwrap());
/// assert!(service.validate(None).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandardCpfService<S> {
    source: S,
}

#[cfg(feature = "rand")]
impl StandardCpfService<super::random::ThreadRngSource> {
    /// Create a service that generates from the thread-local RNG.
    pub fn new() -> Self {
        Self::with_source(super::random::ThreadRngSource)
    }
}

impl<S: DigitSource> StandardCpfService<S> {
    /// Create a service that generates from `source`.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// The digit source used for generation.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn draw_base(&self) -> [u8; BASE_LEN] {
        let mut base = [0u8; BASE_LEN];
        for slot in &mut base {
            *slot = self.source.next_digit() % 10;
        }
        base
    }
}

impl<S: DigitSource> CpfService for StandardCpfService<S> {
    fn validate(&self, cpf: Option<&str>) -> Result<bool, CpfError> {
        let cpf = cpf.ok_or_else(|| CpfError::null("cpf"))?;
        check_digits::validate(cpf)
    }

    fn compute_check_digits(&self, digits: Option<&str>) -> Result<String, CpfError> {
        let digits = digits.ok_or_else(|| CpfError::null("digits"))?;
        check_digits::compute_check_digits(digits).inspect_err(|err| {
            debug!(%err, "check digit computation rejected input");
        })
    }

    fn generate_cpf(&self) -> Cpf {
        let cpf = Cpf::from_base_digits(&self.draw_base());
        debug!("generated cpf");
        cpf
    }
}
