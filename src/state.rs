use std::sync::Arc;
use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{Latency, TicketStore};

// Application state shared between handlers
#[derive(Clone)]
pub struct AppState {
    pub store: TicketStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let latency = Latency::new(config.store.read_latency(), config.store.write_latency());
        let store = TicketStore::seeded(latency, &config.auth.demo_password, config.auth.bcrypt_cost)?;
        Ok(Self {
            store,
            config: Arc::new(config),
        })
    }
}
