//! Held-button state of one hand controller

use crate::ButtonCode;
use serde::{Deserialize, Serialize};

/// Buttons currently held on one controller, one bit per [`ButtonCode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputState {
    bits: u32,
}

impl InputState {
    const VALID_BITS: u32 = (1 << ButtonCode::COUNT) - 1;

    /// Build a state from raw bits; bits beyond the button set are dropped
    pub fn from_bits(bits: u32) -> Self {
        Self {
            bits: bits & Self::VALID_BITS,
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Check if a button is held
    pub fn is_pressed(&self, button: ButtonCode) -> bool {
        self.bits & button.mask() != 0
    }

    /// Check if every button of a combination is held
    pub fn is_combo_pressed(&self, buttons: &[ButtonCode]) -> bool {
        buttons.iter().all(|b| self.is_pressed(*b))
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Held buttons in discriminant order
    pub fn pressed(&self) -> impl Iterator<Item = ButtonCode> + '_ {
        ButtonCode::all().iter().copied().filter(|b| self.is_pressed(*b))
    }

    pub(crate) fn set(&mut self, button: ButtonCode, held: bool) {
        if held {
            self.bits |= button.mask();
        } else {
            self.bits &= !button.mask();
        }
    }
}

impl FromIterator<ButtonCode> for InputState {
    fn from_iter<I: IntoIterator<Item = ButtonCode>>(iter: I) -> Self {
        let mut state = InputState::default();
        for button in iter {
            state.set(button, true);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut state = InputState::default();
        assert!(state.is_empty());

        state.set(ButtonCode::Enter, true);
        assert!(state.is_pressed(ButtonCode::Enter));
        assert!(!state.is_pressed(ButtonCode::Clear));

        state.set(ButtonCode::Enter, false);
        assert!(state.is_empty());
    }

    #[test]
    fn test_combo() {
        let state: InputState = [ButtonCode::Up, ButtonCode::TopAction].into_iter().collect();
        assert!(state.is_combo_pressed(&[ButtonCode::Up, ButtonCode::TopAction]));
        assert!(!state.is_combo_pressed(&[ButtonCode::Up, ButtonCode::Down]));
        assert_eq!(
            state.pressed().collect::<Vec<_>>(),
            vec![ButtonCode::Up, ButtonCode::TopAction]
        );
    }

    #[test]
    fn test_from_bits_masks_unknown_bits() {
        let state = InputState::from_bits(u32::MAX);
        assert_eq!(state.bits().count_ones() as usize, ButtonCode::COUNT);
    }
}
