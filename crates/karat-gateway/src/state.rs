//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The gateway embeds the asset contract over a process-local world
//! state: each request runs one contract invocation against a fresh
//! [`TransactionContext`](karat_ledger::TransactionContext). Submitting
//! invocations to a remote ledger peer (connection setup, identity,
//! endorsement) is a deployment concern outside this service.

use karat_ledger::{AssetRegistry, MemoryState};

/// Application configuration, read from the environment by the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Whether to seed the ledger with the starter assets on startup.
    pub seed_ledger: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            seed_ledger: false,
        }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: [`MemoryState`] shares its data across clones and
/// [`AssetRegistry`] is stateless.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The world state the contract runs against.
    pub world: MemoryState,
    /// The asset contract.
    pub registry: AssetRegistry,
    /// Configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create application state with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            world: MemoryState::new(),
            registry: AssetRegistry::new(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
