//! Client binding for the Covalent blockchain-data HTTP API.
//!
//! Each operation builds a query URL from typed parameters, validates that
//! an API key is present, issues a GET request and returns the raw response
//! body. URL construction is pure and deterministic; the
//! [`endpoints`] builders can be used without a client for testing or for
//! driving a custom transport.

pub mod cli;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
mod http;
pub mod logging;
pub mod params;
pub mod request;

pub use crate::client::CovalentClient;
pub use crate::config::ClientConfig;
pub use crate::error::CovalentError;
pub use crate::params::{DayRange, OutputFormat, PageOptions, QuoteCurrency, SortOrder};
pub use crate::request::{CommonOptions, ResolvedRequest};
