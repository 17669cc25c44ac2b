use std::sync::Arc;

use crate::application::ports::sql_gateway::SqlGateway;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    gateway: Arc<dyn SqlGateway>,
}

impl AppContext {
    pub fn new(cfg: Config, gateway: Arc<dyn SqlGateway>) -> Self {
        Self { cfg, gateway }
    }

    pub fn gateway(&self) -> Arc<dyn SqlGateway> {
        self.gateway.clone()
    }
}
