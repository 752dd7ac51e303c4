//! Service layer for the profile search pipeline.
//!
//! This module contains:
//! - Provider access (`SearchProvider`, `HttpSearchProvider`)
//! - Session ownership and request dispatch (`Dispatcher`)

mod dispatcher;
mod provider;

pub use dispatcher::{Dispatcher, MIN_QUERY_LEN, Submission, Ticket};
pub use provider::{HttpSearchProvider, SearchProvider};
