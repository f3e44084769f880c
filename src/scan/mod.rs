//! Counting screen state machine: Idle → Scanning → Editing → Idle.

mod intent;
mod reducer;
mod state;

pub use intent::ScanIntent;
pub use reducer::ScanReducer;
pub use state::ScanState;
