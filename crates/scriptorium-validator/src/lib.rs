//! Scriptorium Dataset Validator
//!
//! Proves a corpus directory is structurally sound before any article store
//! is built from it.
//!
//! The validator checks:
//! - The path exists, is a directory, and is not empty
//! - Every entry name starts with an article id
//! - The set of ids is exactly `1..=N`
//! - There are as many metadata files as raw text files
//! - No raw text file is empty
//!
//! # Examples
//!
//! ```no_run
//! use scriptorium_validator::{DatasetValidator, DatasetError};
//!
//! let validator = DatasetValidator::new();
//! match validator.validate("tmp/articles") {
//!     Ok(()) => println!("dataset is consistent"),
//!     Err(DatasetError::NotFound(path)) => println!("missing: {}", path.display()),
//!     Err(e) => println!("rejected: {}", e),
//! }
//! ```

#![warn(missing_docs)]

mod error;
mod validator;

pub use error::{DatasetError, Inconsistency};
pub use validator::{validate_dataset, DatasetValidator};
