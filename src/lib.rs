// Fund Analysts - Core Library
// Static analyst persona registry + derived views for the pipeline
// builder and the API server.

pub mod agents;
pub mod analysts;
pub mod auth;

// Re-export commonly used types
pub use agents::{all_specs, default_registry, AgentTask, AgentVerdict, Signal};
pub use analysts::{
    AgentFn, AgentInfo, AnalystCategory, AnalystMeta, AnalystRecord, AnalystRegistry, AnalystSpec,
    RegistryBuilder, RegistryError,
};
pub use auth::{AuthError, Credentials, DevCredentials, LoginOk};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
