use std::{fmt, sync::Arc};

use techscan_core::TechScanner;

use crate::infra::config::Config;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Scanning capability; a trait object so tests can substitute a fake.
    pub scanner: Arc<dyn TechScanner>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>, scanner: Arc<dyn TechScanner>) -> Self {
        Self { config, scanner }
    }
}
