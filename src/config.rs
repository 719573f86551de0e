//! Application-level configuration.

use crate::{
    core::registry::RegistryConfig, logging::DEFAULT_LOG_LEVEL, restaurant::SalesPolicy,
};

/// Everything the binary needs to start a session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name shown in greetings and reports.
    pub restaurant_name: String,
    /// Store capacities.
    pub registry: RegistryConfig,
    /// Purchase and simulation rules.
    pub sales: SalesPolicy,
    /// Stderr log level.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            restaurant_name: "Quatro".to_string(),
            registry: RegistryConfig::default(),
            sales: SalesPolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
