use std::sync::Arc;

use crate::models::{Dataset, Role};
use crate::registry::ChampionTags;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub tags: Arc<dyn ChampionTags>,
    /// Role filter used when a request does not name one
    pub default_roles: Arc<Vec<Role>>,
}

impl AppState {
    pub fn new(dataset: Dataset, tags: Arc<dyn ChampionTags>, default_roles: Vec<Role>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            tags,
            default_roles: Arc::new(default_roles),
        }
    }
}
