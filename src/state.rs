use std::sync::Arc;
use std::time::Instant;

use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(db: Option<Arc<Database>>) -> Self {
        Self {
            started_at: Instant::now(),
            db,
        }
    }

    pub fn db(&self) -> Option<Arc<Database>> {
        self.db.clone()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
