//! # Golden-file assertions
//!
//! Compare a program's output against an expected copy checked in under
//! `testdata/`, and regenerate that copy when the output changes on purpose.
//!
//! - Text is compared after normalizing `\r\n` to `\n`; mismatches render as a
//!   unified diff
//! - Bytes are compared verbatim; mismatches render both sequences
//!
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!
//! # Examples
//!
//! ```rust,no_run
//! let actual = "Hello\nWorld\n";
//! golden::assert_golden!(actual, "greeting.txt");
//! ```
//!
//! Regenerate golden files by running the tests with `UPDATE_GOLDEN=overwrite`.
//!
//! For a result you can inspect instead of a panic:
//! ```rust,no_run
//! let comparison = golden::golden().string("Hello\nWorld\n", "greeting.txt");
//! if let Some(diff) = comparison.message() {
//!     println!("{diff}");
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod action;
mod comparison;
mod data;
mod error;
mod golden;
mod macros;
mod path;

pub mod report;
pub mod reporter;
pub mod utils;

pub use action::Action;
pub use action::DEFAULT_ACTION_ENV;
pub use comparison::Comparison;
pub use data::Data;
pub use error::Error;
pub use error::ErrorKind;
pub use golden::Golden;
pub use path::path;
pub use path::DEFAULT_FIXTURE_DIR;
pub use reporter::Helper;
pub use reporter::Reporter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Golden-file assertions with the update mode read from [`DEFAULT_ACTION_ENV`]
pub fn golden() -> Golden {
    Golden::new().action_env(DEFAULT_ACTION_ENV)
}

#[doc(hidden)]
pub mod __macro_support {
    #[cfg(feature = "color")]
    pub use anstream::eprintln;
    #[cfg(not(feature = "color"))]
    pub use std::eprintln;
}
