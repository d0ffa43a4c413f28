//! Keyboard capability and bindings

use bliss_input::{ButtonCode, KeyMap};
use serde::{Deserialize, Serialize};

/// One key code bound to a controller button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// USB HID usage ID
    pub key_code: u16,
    pub button: ButtonCode,
}

/// Keyboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// The game accepts keyboard input
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// The game cannot be played without a keyboard
    #[serde(default)]
    pub required: bool,

    /// Controller port driven by the keyboard
    #[serde(default)]
    pub player: usize,

    /// Replaces the built-in key map when non-empty
    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

fn default_true() -> bool {
    true
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            required: false,
            player: 0,
            bindings: Vec::new(),
        }
    }
}

impl KeyboardConfig {
    /// Build the key map these settings describe
    pub fn key_map(&self) -> KeyMap {
        if self.bindings.is_empty() {
            KeyMap::default()
        } else {
            KeyMap::from_bindings(self.bindings.iter().map(|b| (b.key_code, b.button)))
        }
    }

    /// Bind a key, replacing any earlier binding of the same key
    pub fn bind(&mut self, key_code: u16, button: ButtonCode) {
        self.bindings.retain(|b| b.key_code != key_code);
        self.bindings.push(KeyBinding { key_code, button });
    }
}
