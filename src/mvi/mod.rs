//! Model-View-Intent primitives.
//!
//! The counting screen is driven by unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of the screen
//! - **Intent**: user action or scan event
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Side effects (store reads and writes) stay outside the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
