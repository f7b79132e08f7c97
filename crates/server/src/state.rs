use crate::{db::Database, guests::GuestService};

#[derive(Clone)]
pub struct AppState {
    pub guests: GuestService,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            guests: GuestService::new(db),
        }
    }
}
