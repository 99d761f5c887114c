use std::sync::Arc;

use crate::config::Settings;
use crate::content::ContentGenerator;

/// Read-only state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub generator: Arc<ContentGenerator>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            generator: Arc::new(ContentGenerator::new()),
        }
    }
}
