//! Utility functions shared across the application.
//!
//! - [`shortlink`] - Base-62 codec for short-link tokens

pub mod shortlink;
