//! CPF check digits, validation and generation.
//!
//! The free functions [`compute_check_digits`] and [`validate`] cover the
//! common case. [`CpfService`] exposes the same operations behind a trait,
//! with generation drawing from an injected [`DigitSource`].

mod check_digits;
mod error;
mod random;
mod service;
mod types;

pub use check_digits::{BASE_LEN, CPF_LEN, compute_check_digits, is_valid, validate};
pub use error::*;
pub use random::*;
pub use service::*;
pub use types::*;
