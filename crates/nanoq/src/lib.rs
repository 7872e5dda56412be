//! # nanoq
//!
//! Symbolic quantity handles for NanoAOD branch names.
//!
//! Analysis code refers to branches through short mnemonics instead of
//! hardcoded strings. Each mnemonic binds an immutable [`Quantity`] that
//! wraps the literal column name; the wrapped string is what gets handed to
//! a branch reader or expression engine. Nothing here reads files or
//! evaluates anything — this crate is the lookup table, the consumer owns
//! the I/O.
//!
//! ## Example
//!
//! ```
//! use nanoq::{nanoaod, registry};
//!
//! // Authoring-time binding: the const carries the column name.
//! assert_eq!(nanoaod::TAU_PT.column_name(), "Tau_pt");
//!
//! // Runtime lookup by mnemonic string, e.g. from a config file.
//! let rho = registry::lookup("rho").unwrap();
//! assert_eq!(rho.column_name(), "Pileup_pudensity");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod nanoaod;
pub mod quantity;
pub mod registry;

pub use error::{QuantityError, Result};
pub use quantity::{Quantity, validate_column_name};
