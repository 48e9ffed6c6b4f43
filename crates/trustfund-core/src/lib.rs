//! TrustFund Core — Domain models and trait seams.
//!
//! These are the core types shared across all crates: the session user,
//! staff review requests, donation catalog shapes, the unified error
//! taxonomy, and the gateway/store traits the flow controllers program
//! against.

pub mod error;
pub mod gateway;
pub mod models;

pub use error::{GatewayError, GatewayErrorKind, GatewayResult, TrustfundError, TrustfundResult};
pub use gateway::{AuthGateway, DonationGateway, RequestGateway, SnapshotStore};
