//! Worksheet domain service.
//!
//! Implements the worksheet driving ports: registration checks the owner
//! exists, sharing flips the `is_open` flag, and reads fetch by id.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::lookup::{map_repository_error, require_user, require_worksheet};
use crate::domain::ports::{
    RegisterWorksheetRequest, RegisterWorksheetResponse, ShareWorksheetResponse, UserRepository,
    WorksheetCommand, WorksheetQuery, WorksheetRepository,
};
use crate::domain::{Error, Worksheet, WorksheetDraft, WorksheetId};

/// Worksheet service implementing [`WorksheetCommand`] and [`WorksheetQuery`].
#[derive(Clone)]
pub struct WorksheetService<U, W> {
    users: Arc<U>,
    worksheets: Arc<W>,
}

impl<U, W> WorksheetService<U, W> {
    pub fn new(users: Arc<U>, worksheets: Arc<W>) -> Self {
        Self { users, worksheets }
    }
}

#[async_trait]
impl<U, W> WorksheetCommand for WorksheetService<U, W>
where
    U: UserRepository,
    W: WorksheetRepository,
{
    async fn register(
        &self,
        request: RegisterWorksheetRequest,
    ) -> Result<RegisterWorksheetResponse, Error> {
        let draft = WorksheetDraft::new(
            request.user_id,
            request.title,
            request.content,
            request.total_pay,
            request.modifiers,
        )
        .map_err(|err| Error::invalid_request(format!("invalid worksheet: {err}")))?;

        require_user(self.users.as_ref(), draft.user_id()).await?;

        let worksheet = self
            .worksheets
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        debug!(worksheet_id = %worksheet.id(), user_id = %worksheet.user_id(), "worksheet registered");

        Ok(RegisterWorksheetResponse {
            worksheet_id: worksheet.id(),
        })
    }

    async fn share(&self, worksheet_id: WorksheetId) -> Result<ShareWorksheetResponse, Error> {
        require_worksheet(self.worksheets.as_ref(), worksheet_id).await?;

        let is_open = self
            .worksheets
            .toggle_open(worksheet_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("worksheet {worksheet_id} not found")))?;
        debug!(%worksheet_id, is_open, "worksheet share flag toggled");

        Ok(ShareWorksheetResponse {
            worksheet_id,
            is_open,
        })
    }
}

#[async_trait]
impl<U, W> WorksheetQuery for WorksheetService<U, W>
where
    U: UserRepository,
    W: WorksheetRepository,
{
    async fn fetch(&self, worksheet_id: WorksheetId) -> Result<Worksheet, Error> {
        require_worksheet(self.worksheets.as_ref(), worksheet_id).await
    }
}

#[cfg(test)]
#[path = "worksheet_service_tests.rs"]
mod tests;
