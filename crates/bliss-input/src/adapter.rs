//! Host event adapter
//!
//! Turns press/release notifications arriving on the host's input thread into
//! per-player [`InputState`] that the emulation thread reads once per frame.

use crate::{ButtonCode, InputError, InputState, KeyMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Number of hand controllers on an Intellivision console
pub const INTELLIVISION_PLAYERS: usize = 2;

/// Capability interface the frontend integration layer talks to
pub trait InputSource: Send + Sync {
    /// Mark a button as held
    fn on_button_press(&self, button: ButtonCode, player: usize) -> Result<(), InputError>;

    /// Mark a button as released
    fn on_button_release(&self, button: ButtonCode, player: usize) -> Result<(), InputError>;

    /// Keyboard key pressed. Unmapped keys are ignored.
    fn on_key_down(&self, key_code: u16);

    /// Keyboard key released. Unmapped keys are ignored.
    fn on_key_up(&self, key_code: u16);

    /// Held buttons of one player
    fn snapshot(&self, player: usize) -> Result<InputState, InputError>;
}

#[derive(Debug)]
struct KeyboardPort {
    map: KeyMap,
    player: usize,
}

/// Lock-guarded input state for every controller port
#[derive(Debug)]
pub struct InputEventAdapter {
    players: RwLock<Vec<InputState>>,
    max_players: usize,
    keyboard: Option<KeyboardPort>,
}

impl InputEventAdapter {
    /// Create an adapter for `max_players` controller ports, keyboard disabled
    pub fn new(max_players: usize) -> Self {
        Self {
            players: RwLock::new(vec![InputState::default(); max_players]),
            max_players,
            keyboard: None,
        }
    }

    /// Route keyboard events through `map` to the controller of `player`
    pub fn with_keyboard(mut self, map: KeyMap, player: usize) -> Result<Self, InputError> {
        self.check_player(player)?;
        tracing::debug!("Keyboard routed to player {} ({} bindings)", player, map.len());
        self.keyboard = Some(KeyboardPort { map, player });
        Ok(self)
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }

    /// Whether the keyboard path is active
    pub fn keyboard_enabled(&self) -> bool {
        self.keyboard.is_some()
    }

    /// Held buttons of every player, read under a single lock acquisition
    pub fn snapshot_all(&self) -> Vec<InputState> {
        self.read().clone()
    }

    /// Release every button on every controller
    pub fn clear(&self) {
        self.write().iter_mut().for_each(|state| *state = InputState::default());
        tracing::debug!("Cleared input state for {} players", self.max_players);
    }

    fn check_player(&self, player: usize) -> Result<(), InputError> {
        if player < self.max_players {
            Ok(())
        } else {
            tracing::warn!("Rejected input for player {} (max {})", player, self.max_players);
            Err(InputError::player(player as i64, self.max_players))
        }
    }

    fn set_held(&self, button: ButtonCode, player: usize, held: bool) -> Result<(), InputError> {
        self.check_player(player)?;
        self.write()[player].set(button, held);
        tracing::trace!("player {} {} {}", player, button.name(), if held { "down" } else { "up" });
        Ok(())
    }

    fn key_transition(&self, key_code: u16, held: bool) {
        let Some(keyboard) = &self.keyboard else {
            tracing::trace!("Keyboard disabled, ignoring key {:#04x}", key_code);
            return;
        };

        match keyboard.map.lookup(key_code) {
            Some(button) => {
                if let Err(err) = self.set_held(button, keyboard.player, held) {
                    tracing::warn!("Keyboard event dropped: {}", err);
                }
            }
            None => tracing::debug!("Unmapped key {:#04x}", key_code),
        }
    }

    // The state is plain bits and every write completes before the guard
    // drops, so a poisoned lock still holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<InputState>> {
        self.players.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<InputState>> {
        self.players.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InputEventAdapter {
    fn default() -> Self {
        Self::new(INTELLIVISION_PLAYERS)
    }
}

impl InputSource for InputEventAdapter {
    fn on_button_press(&self, button: ButtonCode, player: usize) -> Result<(), InputError> {
        self.set_held(button, player, true)
    }

    fn on_button_release(&self, button: ButtonCode, player: usize) -> Result<(), InputError> {
        self.set_held(button, player, false)
    }

    fn on_key_down(&self, key_code: u16) {
        self.key_transition(key_code, true);
    }

    fn on_key_up(&self, key_code: u16) {
        self.key_transition(key_code, false);
    }

    fn snapshot(&self, player: usize) -> Result<InputState, InputError> {
        self.check_player(player)?;
        Ok(self.read()[player])
    }
}
