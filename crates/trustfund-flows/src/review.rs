//! Staff request review workflow.
//!
//! A client-local queue of pending requests backed by the remote
//! list/approve/reject triad. The core logic is the status transition
//! rule: `Pending -> Approved | Rejected`, terminal states immutable,
//! rejection always carrying an audit note.

use tracing::debug;
use trustfund_core::gateway::RequestGateway;
use trustfund_core::models::request::{RequestStatus, StaffRequest};

use crate::error::FlowError;

/// Status filter for the queue view. `All` passes everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(RequestStatus),
}

/// Pure filter over a request list. No side effects, no reordering.
pub fn filter_by_status(rows: &[StaffRequest], filter: StatusFilter) -> Vec<&StaffRequest> {
    match filter {
        StatusFilter::All => rows.iter().collect(),
        StatusFilter::Only(status) => rows.iter().filter(|r| r.status == status).collect(),
    }
}

pub struct ReviewWorkflow<G: RequestGateway> {
    gateway: G,
    rows: Vec<StaffRequest>,
    selected_id: Option<String>,
}

impl<G: RequestGateway> ReviewWorkflow<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            rows: Vec::new(),
            selected_id: None,
        }
    }

    pub fn rows(&self) -> &[StaffRequest] {
        &self.rows
    }

    pub fn filtered(&self, filter: StatusFilter) -> Vec<&StaffRequest> {
        filter_by_status(&self.rows, filter)
    }

    /// The request currently open in the detail panel, if any.
    pub fn selected(&self) -> Option<&StaffRequest> {
        let id = self.selected_id.as_deref()?;
        self.rows.iter().find(|r| r.id == id)
    }

    /// Reload the queue from the gateway. The selection survives only if
    /// the same request is still present in the fresh list.
    pub async fn refresh(&mut self) -> Result<(), FlowError> {
        let rows = self.gateway.list_requests().await?;
        self.rows = rows;
        if let Some(id) = &self.selected_id {
            if !self.rows.iter().any(|r| r.id == *id) {
                self.selected_id = None;
            }
        }
        Ok(())
    }

    /// Open a request for inspection. Never mutates its status.
    pub fn select(&mut self, id: &str) -> Result<(), FlowError> {
        if !self.rows.iter().any(|r| r.id == id) {
            return Err(FlowError::RequestNotFound { id: id.to_string() });
        }
        self.selected_id = Some(id.to_string());
        Ok(())
    }

    /// Approve a pending request.
    ///
    /// Calling this on a request already in a terminal state is a no-op:
    /// no gateway call is issued and nothing changes. The result of the
    /// remote call is applied only if the request is still pending when
    /// it lands.
    pub async fn approve(&mut self, id: &str) -> Result<(), FlowError> {
        let row = self
            .rows
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| FlowError::RequestNotFound { id: id.to_string() })?;
        if row.status.is_terminal() {
            debug!(request = id, "approve on terminal request ignored");
            return Ok(());
        }

        self.gateway.approve_request(id).await?;

        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            if row.status == RequestStatus::Pending {
                row.status = RequestStatus::Approved;
            }
        }
        Ok(())
    }

    /// Reject a pending request with a mandatory audit note.
    pub async fn reject(&mut self, id: &str, note: &str) -> Result<(), FlowError> {
        let note = note.trim();
        if note.is_empty() {
            return Err(FlowError::EmptyRejectionNote);
        }
        let row = self
            .rows
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| FlowError::RequestNotFound { id: id.to_string() })?;
        if row.status.is_terminal() {
            debug!(request = id, "reject on terminal request ignored");
            return Ok(());
        }

        self.gateway.reject_request(id, note).await?;

        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            if row.status == RequestStatus::Pending {
                row.status = RequestStatus::Rejected;
                row.rejection_note = Some(note.to_string());
            }
        }
        Ok(())
    }
}
