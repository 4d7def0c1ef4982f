use crate::config::AppConfig;
use crate::services::agent::Agent;
use crate::services::messaging::MessagingProvider;
use crate::store::Store;

pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
    pub agent: Agent,
    pub messaging: Box<dyn MessagingProvider>,
}
