//! Driving ports for worksheet registration, sharing and read-back.

use async_trait::async_trait;

use crate::domain::{Error, PayModifiers, UserId, Worksheet, WorksheetId};

/// Request to register a worksheet for a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterWorksheetRequest {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub total_pay: i64,
    pub modifiers: PayModifiers,
}

/// Identifier of the newly registered worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWorksheetResponse {
    pub worksheet_id: WorksheetId,
}

/// Share flag after a share request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareWorksheetResponse {
    pub worksheet_id: WorksheetId,
    pub is_open: bool,
}

/// Driving port for worksheet write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorksheetCommand: Send + Sync {
    /// Register a worksheet after confirming the owner exists.
    async fn register(
        &self,
        request: RegisterWorksheetRequest,
    ) -> Result<RegisterWorksheetResponse, Error>;

    /// Flip the worksheet's share flag.
    async fn share(&self, worksheet_id: WorksheetId) -> Result<ShareWorksheetResponse, Error>;
}

/// Driving port for worksheet reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorksheetQuery: Send + Sync {
    /// Fetch a worksheet or fail with not-found.
    async fn fetch(&self, worksheet_id: WorksheetId) -> Result<Worksheet, Error>;
}
