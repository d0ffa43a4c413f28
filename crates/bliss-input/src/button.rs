//! Intellivision hand controller buttons
//!
//! One hand controller has a directional disc, a 12-key keypad and three
//! side action buttons (the two upper side buttons are wired together).

use crate::InputError;
use serde::{Deserialize, Serialize};

/// Hand controller buttons.
///
/// The discriminants are the integer values hosts send for each button and
/// also the bit positions in [`InputState`](crate::InputState).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonCode {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Keypad1 = 4,
    Keypad2 = 5,
    Keypad3 = 6,
    Keypad4 = 7,
    Keypad5 = 8,
    Keypad6 = 9,
    Keypad7 = 10,
    Keypad8 = 11,
    Keypad9 = 12,
    Clear = 13,
    Keypad0 = 14,
    Enter = 15,
    TopAction = 16,
    BottomLeftAction = 17,
    BottomRightAction = 18,
}

impl ButtonCode {
    /// Number of buttons on one hand controller
    pub const COUNT: usize = 19;

    /// Get all buttons, in discriminant order
    pub fn all() -> &'static [ButtonCode] {
        &[
            ButtonCode::Up,
            ButtonCode::Down,
            ButtonCode::Left,
            ButtonCode::Right,
            ButtonCode::Keypad1,
            ButtonCode::Keypad2,
            ButtonCode::Keypad3,
            ButtonCode::Keypad4,
            ButtonCode::Keypad5,
            ButtonCode::Keypad6,
            ButtonCode::Keypad7,
            ButtonCode::Keypad8,
            ButtonCode::Keypad9,
            ButtonCode::Clear,
            ButtonCode::Keypad0,
            ButtonCode::Enter,
            ButtonCode::TopAction,
            ButtonCode::BottomLeftAction,
            ButtonCode::BottomRightAction,
        ]
    }

    /// Get button name (same spelling as the serde representation)
    pub fn name(&self) -> &'static str {
        match self {
            ButtonCode::Up => "up",
            ButtonCode::Down => "down",
            ButtonCode::Left => "left",
            ButtonCode::Right => "right",
            ButtonCode::Keypad1 => "keypad1",
            ButtonCode::Keypad2 => "keypad2",
            ButtonCode::Keypad3 => "keypad3",
            ButtonCode::Keypad4 => "keypad4",
            ButtonCode::Keypad5 => "keypad5",
            ButtonCode::Keypad6 => "keypad6",
            ButtonCode::Keypad7 => "keypad7",
            ButtonCode::Keypad8 => "keypad8",
            ButtonCode::Keypad9 => "keypad9",
            ButtonCode::Clear => "clear",
            ButtonCode::Keypad0 => "keypad0",
            ButtonCode::Enter => "enter",
            ButtonCode::TopAction => "top_action",
            ButtonCode::BottomLeftAction => "bottom_left_action",
            ButtonCode::BottomRightAction => "bottom_right_action",
        }
    }

    /// Bit mask of this button inside an [`InputState`](crate::InputState)
    pub fn mask(self) -> u32 {
        1 << self as u8
    }

    /// Is this one of the four disc directions
    pub fn is_direction(self) -> bool {
        matches!(
            self,
            ButtonCode::Up | ButtonCode::Down | ButtonCode::Left | ButtonCode::Right
        )
    }

    /// Is this one of the twelve keypad keys
    pub fn is_keypad(self) -> bool {
        (ButtonCode::Keypad1 as u8..=ButtonCode::Enter as u8).contains(&(self as u8))
    }
}

impl TryFrom<i64> for ButtonCode {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| ButtonCode::all().get(index).copied())
            .ok_or_else(|| InputError::button(value, ButtonCode::COUNT))
    }
}

/// Direction of a button transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Pressed,
    Released,
}

/// A single press or release reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonEvent {
    pub button: ButtonCode,
    pub player: usize,
    pub transition: Transition,
}

impl ButtonEvent {
    pub fn pressed(button: ButtonCode, player: usize) -> Self {
        Self {
            button,
            player,
            transition: Transition::Pressed,
        }
    }

    pub fn released(button: ButtonCode, player: usize) -> Self {
        Self {
            button,
            player,
            transition: Transition::Released,
        }
    }

    /// Apply this event to an input source. Takes `self` by value so an event
    /// is consumed exactly once.
    pub fn apply_to<S: crate::InputSource + ?Sized>(self, source: &S) -> Result<(), InputError> {
        match self.transition {
            Transition::Pressed => source.on_button_press(self.button, self.player),
            Transition::Released => source.on_button_release(self.button, self.player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_names() {
        assert_eq!(ButtonCode::Up.name(), "up");
        assert_eq!(ButtonCode::Keypad0.name(), "keypad0");
        assert_eq!(ButtonCode::BottomRightAction.name(), "bottom_right_action");
    }

    #[test]
    fn test_all_is_in_discriminant_order() {
        assert_eq!(ButtonCode::all().len(), ButtonCode::COUNT);
        for (index, button) in ButtonCode::all().iter().enumerate() {
            assert_eq!(*button as usize, index);
        }
    }

    #[test]
    fn test_masks_are_distinct() {
        let combined = ButtonCode::all().iter().fold(0u32, |acc, b| {
            assert_eq!(acc & b.mask(), 0, "{} overlaps", b.name());
            acc | b.mask()
        });
        assert_eq!(combined.count_ones() as usize, ButtonCode::COUNT);
    }

    #[test]
    fn test_try_from_raw() {
        assert_eq!(ButtonCode::try_from(0), Ok(ButtonCode::Up));
        assert_eq!(ButtonCode::try_from(15), Ok(ButtonCode::Enter));
        assert_eq!(ButtonCode::try_from(18), Ok(ButtonCode::BottomRightAction));
        assert_eq!(ButtonCode::try_from(19), Err(InputError::button(19, ButtonCode::COUNT)));
        assert!(ButtonCode::try_from(-1).is_err());
    }

    #[test]
    fn test_button_groups() {
        assert!(ButtonCode::Left.is_direction());
        assert!(!ButtonCode::Enter.is_direction());
        assert!(ButtonCode::Clear.is_keypad());
        assert!(ButtonCode::Keypad0.is_keypad());
        assert!(!ButtonCode::TopAction.is_keypad());
        assert!(!ButtonCode::Right.is_keypad());
    }

    #[test]
    fn test_serde_names_match() {
        for button in ButtonCode::all() {
            let json = serde_json::to_string(button).unwrap();
            assert_eq!(json, format!("\"{}\"", button.name()));
        }
    }
}
