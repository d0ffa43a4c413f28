//! Intellivision controller input
//!
//! This crate holds the input side of the Bliss core bridge: the hand
//! controller button set, per-player held-button state, and the adapter that
//! applies host press/release and keyboard events to that state.
//!
//! Events arrive on the host's input thread while the core reads state on
//! its emulation thread once per frame; the adapter guards state with a lock
//! so every frame sees fully applied events.
//!
//! # Example
//!
//! ```
//! use bliss_input::{ButtonCode, InputEventAdapter, InputSource};
//!
//! fn main() -> anyhow::Result<()> {
//!     let adapter = InputEventAdapter::new(2);
//!     adapter.on_button_press(ButtonCode::Enter, 0)?;
//!
//!     let state = adapter.snapshot(0)?;
//!     assert!(state.is_pressed(ButtonCode::Enter));
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod button;
pub mod error;
pub mod keymap;
pub mod state;

pub use adapter::{INTELLIVISION_PLAYERS, InputEventAdapter, InputSource};
pub use button::{ButtonCode, ButtonEvent, Transition};
pub use error::{InputError, InputField};
pub use keymap::KeyMap;
pub use state::InputState;

/// Input Result type
pub type Result<T> = std::result::Result<T, InputError>;
