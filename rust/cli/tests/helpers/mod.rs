//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` executes the built `pokerhand` binary with an
//!   isolated environment and captures stdout, stderr and the exit code.
//!
//! ```rust,ignore
//! use crate::helpers::cli_runner::CliRunner;
//!
//! let cli = CliRunner::new().expect("cli runner");
//! let res = cli.run(&["classify", "AS TS QS JS KS"]);
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod error {
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    pub struct TestError {
        pub kind: TestErrorKind,
        pub message: String,
    }

    impl TestError {
        pub fn new(kind: TestErrorKind, message: impl Into<String>) -> Self {
            Self {
                kind,
                message: message.into(),
            }
        }
    }

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }

    impl StdError for TestError {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TestErrorKind {
        BinaryNotFound,
    }

    impl fmt::Display for TestErrorKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                TestErrorKind::BinaryNotFound => f.write_str("binary not found"),
            }
        }
    }
}

pub use error::{TestError, TestErrorKind};
