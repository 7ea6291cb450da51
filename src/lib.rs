//! listedit - a small list editor for the terminal
//!
//! Items are added from an input box and removed or rewritten in place.
//! The modal layout gates row gestures behind Delete / Edit modes; the
//! classic layout gives every row its own buttons.

pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod render;
