//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! OS key injection and config file storage.

pub mod config;
pub mod injector;

// Re-export adapters
pub use config::XdgConfigStore;
pub use injector::{create_injector, DryRunInjector, EnigoInjector, InjectorTool};
