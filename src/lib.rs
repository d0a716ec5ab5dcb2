//! Auto Key Presser - press keys repeatedly at configurable intervals
//!
//! This crate turns a table of user-authored key entries (key name,
//! interval, enabled flag) into concurrently running timers, each of which
//! injects its key into the OS input stream until the run is stopped.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Key entries, key resolution tables, and errors
//! - **Application**: The runner, run planning, and port interfaces
//! - **Infrastructure**: Adapter implementations (enigo, dry-run, config file)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
