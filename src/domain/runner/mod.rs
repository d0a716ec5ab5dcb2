//! Runner lifecycle state

mod state;

pub use state::RunnerState;
