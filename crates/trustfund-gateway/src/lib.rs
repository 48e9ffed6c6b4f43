//! TrustFund Gateway — The JSON-over-HTTP client for the remote API
//! gateway, plus snapshot store implementations.
//!
//! This crate provides:
//! - The HTTP implementation of the core gateway traits ([`HttpGateway`])
//! - Boundary error normalization ([`classify_server_message`])
//! - Snapshot stores ([`MemorySnapshotStore`], [`JsonFileStore`])
//!
//! Everything above this crate sees only the normalized
//! `GatewayError`; the wire's ad-hoc `error`/`message`/`errors[]`
//! shapes stop here.

mod error;
mod http;
mod store;

pub use error::{classify_server_message, extract_server_message, CONNECTION_MESSAGE};
pub use http::HttpGateway;
pub use store::{JsonFileStore, MemorySnapshotStore};
