//! Shared application state for all routes.

use crate::config::ApiSettings;
use crate::service::TutorialService;
use crate::store::TutorialStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tutorials: TutorialService,
}

impl AppState {
    pub fn new(store: Arc<dyn TutorialStore>, settings: ApiSettings) -> Self {
        Self {
            tutorials: TutorialService::new(store, settings),
        }
    }
}
