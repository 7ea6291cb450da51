//! Handler module - Input event handling

pub mod action;
pub mod key;
pub mod mouse;

pub use action::{
    apply_paste, apply_text_key, handle_action, handle_mouse_action, ActionResult,
};
pub use key::{handle_key_event, update_input_buffer, KeyAction};
pub use mouse::{handle_mouse_event, MouseAction};
