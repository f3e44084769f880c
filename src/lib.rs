//! Barcode-driven inventory counting.
//!
//! A scan resolves to a product, opens an edit buffer, and a save folds the
//! buffer into the tally list, which is persisted as a whole to a key-value
//! store.

pub mod barcode;
pub mod capability;
pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod reconcile;
pub mod scan;
pub mod session;
pub mod store;
