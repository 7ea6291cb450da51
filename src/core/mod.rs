//! Core module - Editor state, list operations and modes

pub mod list;
pub mod mode;
pub mod state;
pub mod store;

pub use mode::{Focus, Mode, Variant};
pub use state::AppState;
pub use store::{RowOutcome, Store};
