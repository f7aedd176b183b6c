use std::sync::Arc;

use crate::config::Config;
use crate::store::ContactStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    pub config: Config,
}
