//! Staff review request domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review status of a queued staff request.
///
/// Transitions are `Pending -> Approved` or `Pending -> Rejected` only;
/// terminal states are never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn is_terminal(self) -> bool {
        self != RequestStatus::Pending
    }
}

/// Campaign-level action a fund owner has asked staff to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignAction {
    Withdrawal,
    SuspendCampaign,
    ResumeCampaign,
    CreateVoting,
    ApproveCampaign,
}

/// What a moderation flag points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "target_type", content = "target_id")]
pub enum FlagTarget {
    Post(i64),
    Campaign(i64),
}

/// Variant-specific payload of a staff request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "type")]
pub enum RequestDetail {
    Campaign {
        action: CampaignAction,
        campaign_id: i64,
        campaign_title: String,
        requester_name: String,
        /// Present for withdrawal requests.
        amount: Option<i64>,
    },
    Kyc {
        user_id: i64,
        full_name: String,
        document_type: String,
        document_number: String,
    },
    Flag {
        reporter_id: i64,
        target: FlagTarget,
        reason: String,
    },
}

/// A queued request awaiting staff review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRequest {
    pub id: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    /// Mandatory audit note attached when the request is rejected.
    pub rejection_note: Option<String>,
    #[serde(flatten)]
    pub detail: RequestDetail,
}
