//! Core domain concepts shared across all subdomains.
//!
//! - [`prompt::PromptPair`]: the batch-level system/user prompt pair
//! - [`credential::Credential`]: an opaque backend API key
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod prompt;
