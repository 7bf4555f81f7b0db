use std::sync::Arc;

use crate::config::Config;
use crate::content::{Profile, SectionRegistry, PROFILE};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub profile: &'static Profile,
    pub sections: SectionRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            profile: &PROFILE,
            sections: SectionRegistry::default(),
        }
    }
}
