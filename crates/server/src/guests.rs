//! Guest record service: validates registrations, persists them, and answers
//! the by-host and by-date read patterns plus deletion.

use shared::{CreateGuestRequest, DateGuestEntry, GuestRecord, HostGuestEntry};

use crate::{
    db::{Database, NewGuest},
    error::AppError,
};

#[derive(Clone)]
pub struct GuestService {
    db: Database,
}

/// Blank text counts as absent: required fields reject it, optional ones store NULL.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl GuestService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateGuestRequest) -> Result<GuestRecord, AppError> {
        let required = [
            ("line_user_id", &req.line_user_id),
            ("host_name", &req.host_name),
            ("first_name", &req.first_name),
            ("last_name", &req.last_name),
            ("date", &req.date),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| non_blank((*value).clone()).is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing required fields: {}.",
                missing.join(", ")
            )));
        }

        let guest = NewGuest {
            line_user_id: req.line_user_id.unwrap_or_default(),
            host_name: req.host_name.unwrap_or_default(),
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            phone: non_blank(req.phone),
            visit_date: req.date.unwrap_or_default(),
            arrival_time: non_blank(req.arrival_time),
        };

        let row = self.db.insert_guest(&guest).await?;
        tracing::info!(
            "Registered guest {} for host {} on {}",
            row.id,
            guest.host_name,
            guest.visit_date
        );
        Ok(row.into())
    }

    pub async fn list_by_host(&self, host_name: &str) -> Result<Vec<HostGuestEntry>, AppError> {
        if host_name.trim().is_empty() {
            return Err(AppError::BadRequest("Missing hostName parameter.".to_string()));
        }
        let rows = self.db.guests_by_host(host_name).await?;
        tracing::debug!("Found {} guests for host {}", rows.len(), host_name);
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Exact string match on the stored visit date; no date normalization.
    pub async fn list_by_date(&self, date: &str) -> Result<Vec<DateGuestEntry>, AppError> {
        if date.trim().is_empty() {
            return Err(AppError::BadRequest("Missing date parameter.".to_string()));
        }
        let rows = self.db.guests_by_date(date).await?;
        tracing::debug!("Found {} guests visiting on {}", rows.len(), date);
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn delete(&self, guest_id: &str) -> Result<(), AppError> {
        let id: i64 = guest_id
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid guest id: {}", guest_id)))?;

        if !self.db.delete_guest(id).await? {
            return Err(AppError::NotFound("Guest not found.".to_string()));
        }
        tracing::info!("Deleted guest {}", id);
        Ok(())
    }
}
