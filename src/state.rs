use std::sync::Arc;

use crate::{config::Config, usecases::publish::Publisher};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub publisher: Arc<Publisher>,
}

impl AppState {
    pub fn new(config: Arc<Config>, publisher: Arc<Publisher>) -> Self {
        Self { config, publisher }
    }
}
