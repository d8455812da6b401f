//! CLI operation handlers.
//!
//! - [`repository_listing`]: fetch and print an owner's repositories
//! - [`output`]: output formatting

pub mod output;
pub mod repository_listing;
