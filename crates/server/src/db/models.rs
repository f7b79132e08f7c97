use shared::{DateGuestEntry, GuestRecord, HostGuestEntry};
use sqlx::FromRow;

/// Validated insert payload.
#[derive(Debug, Clone)]
pub struct NewGuest {
    pub line_user_id: String,
    pub host_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub visit_date: String,
    pub arrival_time: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Guest {
    pub id: i64,
    pub line_user_id: String,
    pub host_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub visit_date: String,
    pub arrival_time: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct HostGuestRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub date: String,
    pub arrival_time: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct DateGuestRow {
    pub host_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub arrival_time: Option<String>,
}

impl From<Guest> for GuestRecord {
    fn from(row: Guest) -> Self {
        Self {
            id: row.id,
            line_user_id: row.line_user_id,
            host_name: row.host_name,
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            visit_date: row.visit_date,
            arrival_time: row.arrival_time,
            created_at: row.created_at,
        }
    }
}

impl From<HostGuestRow> for HostGuestEntry {
    fn from(row: HostGuestRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            date: row.date,
            arrival_time: row.arrival_time,
        }
    }
}

impl From<DateGuestRow> for DateGuestEntry {
    fn from(row: DateGuestRow) -> Self {
        Self {
            host_name: row.host_name,
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            arrival_time: row.arrival_time,
        }
    }
}
