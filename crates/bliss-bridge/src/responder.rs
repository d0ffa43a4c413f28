//! Interfaces the host frontend and the core call into

use bliss_input::{InputError, InputState};

/// Intellivision controller events from the host.
///
/// Hosts speak in signed integers for both button and player, so both are
/// range checked here before they reach the input adapter.
pub trait IntellivisionResponder {
    fn did_push_button(&self, button: i64, player: i64) -> Result<(), InputError>;

    fn did_release_button(&self, button: i64, player: i64) -> Result<(), InputError>;
}

/// Keyboard capability of a core
pub trait KeyboardResponder {
    /// The running game accepts keyboard input
    fn game_supports_keyboard(&self) -> bool;

    /// The running game is unplayable without a keyboard
    fn requires_keyboard(&self) -> bool;

    fn key_down(&self, key_code: u16);

    fn key_up(&self, key_code: u16);
}

/// Per-frame input read by the emulation thread
pub trait CoreInputPort {
    /// Number of controller ports
    fn player_count(&self) -> usize;

    /// Held buttons of every port, all taken at the same instant
    fn frame_input(&self) -> Vec<InputState>;
}
