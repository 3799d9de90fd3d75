//! Request builders, one module per resource family.
//!
//! Every function here is a pure builder: it validates its parameters,
//! assembles the endpoint URL and returns a [`ResolvedRequest`] without
//! performing any I/O. The async methods on
//! [`CovalentClient`](crate::client::CovalentClient) are thin wrappers that
//! execute these requests over the HTTP transport.

pub mod address;
pub mod block;
pub mod defi;
pub mod events;
pub mod nft;
pub mod pricing;
pub mod tokens;

pub use crate::request::{CommonOptions, ResolvedRequest};
