//! PostgreSQL-backed `WorksheetRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, WorksheetRepository};
use crate::domain::{PayModifiers, UserId, Worksheet, WorksheetDraft, WorksheetId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewWorksheetRow, WorksheetRow};
use super::pool::DbPool;
use super::schema::worksheets;

/// Diesel-backed implementation of the worksheet repository port.
#[derive(Clone)]
pub struct DieselWorksheetRepository {
    pool: DbPool,
}

impl DieselWorksheetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_worksheet(row: WorksheetRow) -> Result<Worksheet, RepositoryError> {
    let modifiers = PayModifiers {
        extra_pay: row.extra_pay,
        week_pay: row.week_pay,
        night_pay: row.night_pay,
        overtime_pay: row.overtime_pay,
        holiday_pay: row.holiday_pay,
    };
    let draft = WorksheetDraft::new(
        UserId::new(row.user_id),
        row.title,
        row.content,
        row.total_pay,
        modifiers,
    )
    .map_err(|err| RepositoryError::query(format!("worksheet {}: {err}", row.id)))?;

    Ok(Worksheet::new(
        WorksheetId::new(row.id),
        draft,
        row.is_open,
        row.created_at,
    ))
}

#[async_trait]
impl WorksheetRepository for DieselWorksheetRepository {
    async fn find_by_id(&self, id: WorksheetId) -> Result<Option<Worksheet>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = worksheets::table
            .find(id.get())
            .select(WorksheetRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_worksheet).transpose()
    }

    async fn insert(&self, draft: &WorksheetDraft) -> Result<Worksheet, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let modifiers = draft.modifiers();
        let new_row = NewWorksheetRow {
            user_id: draft.user_id().get(),
            title: draft.title(),
            content: draft.content(),
            total_pay: draft.total_pay(),
            extra_pay: modifiers.extra_pay,
            week_pay: modifiers.week_pay,
            night_pay: modifiers.night_pay,
            overtime_pay: modifiers.overtime_pay,
            holiday_pay: modifiers.holiday_pay,
        };

        let row = diesel::insert_into(worksheets::table)
            .values(&new_row)
            .returning(WorksheetRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_worksheet(row)
    }

    async fn toggle_open(&self, id: WorksheetId) -> Result<Option<bool>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(worksheets::table.find(id.get()))
            .set(worksheets::is_open.eq(diesel::dsl::not(worksheets::is_open)))
            .returning(worksheets::is_open)
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }
}
