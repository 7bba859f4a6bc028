//! Selection/view state
//!
//! Session-local derived state (filtered view + row selection) and the
//! registry that keys it by session id.

mod manager;
mod state;

pub use manager::SessionManager;
pub use state::{SessionState, INITIAL_SAMPLE_SEED, INITIAL_SAMPLE_SIZE};
