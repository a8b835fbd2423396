//! Username candidate generation library
//!
//! This library expands full names into the login-style username formats
//! commonly seen in organizational account-naming schemes, for use in
//! authorized security testing (password spraying, OSINT enumeration).
//!
//! # Examples
//!
//! ```rust
//! use usermint::aggregator::aggregate;
//! use usermint::patterns::generate;
//! use usermint::tokenizer::tokenize;
//!
//! // One name at a time
//! let tokens = tokenize("Arthur Edwards");
//! let candidates = generate(&tokens);
//! assert!(candidates.contains(&"a.edwards".to_string()));
//!
//! // A whole roster, merged and deduplicated
//! let (usernames, counts) = aggregate(["Arthur Edwards", "John Smith"]);
//! assert_eq!(counts.len(), 2);
//! assert!(usernames.contains("jsmith"));
//! ```

pub mod aggregator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod patterns;
pub mod tokenizer;

// Re-export commonly used types for convenience
pub use aggregator::{NameCount, UsernameSet, aggregate};
pub use config::Config;
pub use error::AppError;
pub use patterns::generate;
pub use tokenizer::{TokenSequence, tokenize};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
