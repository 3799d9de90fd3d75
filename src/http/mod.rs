//! HTTP transport for assembled Covalent requests.
//!
//! A deliberately thin layer: it issues the GET described by a
//! [`ResolvedRequest`](crate::request::ResolvedRequest) and hands the raw
//! response body back. No retries, no backoff and no response parsing;
//! non-success statuses surface as
//! [`CovalentError::ServerError`](crate::error::CovalentError::ServerError)
//! with the status and body attached, and callers wanting retry semantics
//! wrap the client themselves.

mod http_client;

pub(crate) use http_client::HttpClient;
