//! Key injector infrastructure module
//!
//! Provides cross-platform key injection using enigo, plus a dry-run
//! adapter that only logs.

mod dry_run;
mod enigo;
mod factory;

pub use dry_run::DryRunInjector;
pub use self::enigo::EnigoInjector;
pub use factory::{create_injector, InjectorTool, ParseInjectorToolError, VALID_INJECTOR_TOOLS};
