//! TrustFund Flows — The client-side flow controllers: OTP challenge,
//! donation composer, staff request review workflow, and the session
//! adapter.
//!
//! Controllers are generic over the `trustfund-core` gateway traits so
//! this crate has no dependency on the transport layer.

pub mod config;
pub mod cooldown;
pub mod donation;
pub mod error;
pub mod otp;
pub mod password;
pub mod review;
pub mod session;

pub use config::FlowConfig;
pub use cooldown::Cooldown;
pub use donation::{DonationComposer, DonationMode, DonationState};
pub use error::FlowError;
pub use otp::{OtpAdvance, OtpChallenge, OtpPurpose, OtpStep};
pub use review::{filter_by_status, ReviewWorkflow, StatusFilter};
pub use session::SessionAdapter;
