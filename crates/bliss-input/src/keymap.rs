//! Keyboard to hand controller mapping
//!
//! Key codes are USB HID usage IDs (keyboard page), which is what the host
//! reports for physical and virtual keyboards.

use crate::ButtonCode;
use std::collections::HashMap;

/// Static lookup from raw key codes to controller buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    map: HashMap<u16, ButtonCode>,
}

impl KeyMap {
    /// Create an empty key map (every key ignored)
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create from explicit bindings. A key bound twice keeps its last binding.
    pub fn from_bindings<I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (u16, ButtonCode)>,
    {
        Self {
            map: bindings.into_iter().collect(),
        }
    }

    /// Look up the button for a key code
    pub fn lookup(&self, key_code: u16) -> Option<ButtonCode> {
        self.map.get(&key_code).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over all bindings
    pub fn bindings(&self) -> impl Iterator<Item = (u16, ButtonCode)> + '_ {
        self.map.iter().map(|(k, b)| (*k, *b))
    }

    fn default_map() -> HashMap<u16, ButtonCode> {
        let mut map = HashMap::new();

        // Arrow keys drive the disc
        map.insert(0x52, ButtonCode::Up);    // UpArrow
        map.insert(0x51, ButtonCode::Down);  // DownArrow
        map.insert(0x50, ButtonCode::Left);  // LeftArrow
        map.insert(0x4F, ButtonCode::Right); // RightArrow

        // Top row digits
        let keypad = [
            ButtonCode::Keypad1,
            ButtonCode::Keypad2,
            ButtonCode::Keypad3,
            ButtonCode::Keypad4,
            ButtonCode::Keypad5,
            ButtonCode::Keypad6,
            ButtonCode::Keypad7,
            ButtonCode::Keypad8,
            ButtonCode::Keypad9,
        ];
        for (offset, button) in keypad.iter().enumerate() {
            map.insert(0x1E + offset as u16, *button); // Keyboard1..9
            map.insert(0x59 + offset as u16, *button); // Keypad1..9
        }
        map.insert(0x27, ButtonCode::Keypad0); // Keyboard0
        map.insert(0x62, ButtonCode::Keypad0); // Keypad0

        map.insert(0x28, ButtonCode::Enter); // Return
        map.insert(0x58, ButtonCode::Enter); // KeypadEnter
        map.insert(0x2A, ButtonCode::Clear); // Backspace
        map.insert(0x4C, ButtonCode::Clear); // DeleteForward

        // Side buttons
        map.insert(0x1D, ButtonCode::TopAction);         // Z
        map.insert(0x1B, ButtonCode::BottomLeftAction);  // X
        map.insert(0x06, ButtonCode::BottomRightAction); // C

        map
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            map: Self::default_map(),
        }
    }
}
