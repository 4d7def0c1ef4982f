pub mod agent;
pub mod intent;
pub mod messaging;
