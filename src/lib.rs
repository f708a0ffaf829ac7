//! # cpf
//!
//! Check digit computation, validation and random generation for the
//! Brazilian CPF (Cadastro de Pessoas Físicas): 9 base digits followed by
//! 2 mod-11 check digits.
//!
//! Values are bare digit strings. Masked forms (`312.496.070-00`) are
//! neither produced nor accepted.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpf::*;
//!
//! assert_eq!(compute_check_digits("312496070").unwrap(), "31249607000");
//! assert!(validate("31249607000").unwrap());
//! assert!(!validate("31249607001").unwrap());
//!
//! let service = StandardCpfService::with_source(FixedDigitSource::from_digits("312496070"));
//! let generated = service.generate();
//! assert_eq!(generated, "31249607000");
//! assert_eq!(service.validate(Some(generated.as_str())), Ok(true));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `rand` (default) | `ThreadRngSource`, `SeededDigitSource`, `StandardCpfService::new()` |

pub mod core;

// Re-export core types at crate root for convenience
pub use crate::core::*;
