//! The Bliss core bridge object

use crate::{BridgeError, CoreInputPort, IntellivisionResponder, KeyboardResponder};
use bliss_config::{BridgeConfig, CoreOptions};
use bliss_input::{ButtonCode, InputError, InputEventAdapter, InputSource, InputState};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Joins the host-facing responder surface to the input adapter the core
/// reads from.
///
/// Host input threads and the emulation thread may share one bridge behind
/// an `Arc`; everything they call takes `&self`.
#[derive(Debug)]
pub struct BlissCoreBridge {
    /// Cartridge database path handed to the core
    known_carts_path: Option<PathBuf>,

    /// Controller state shared between host and core
    adapter: Arc<InputEventAdapter>,

    /// Keyboard is part of the declared capability set
    supports_keyboard: bool,

    /// Game cannot run without a keyboard
    requires_keyboard: bool,

    options: CoreOptions,
}

impl BlissCoreBridge {
    /// Build a bridge from configuration
    pub fn new(config: &BridgeConfig) -> Result<Self, BridgeError> {
        config.validate()?;

        let mut adapter = InputEventAdapter::new(config.input.max_players);
        let keyboard = &config.keyboard;
        if keyboard.enabled {
            adapter = adapter.with_keyboard(keyboard.key_map(), keyboard.player)?;
        }

        tracing::info!(
            "Bliss bridge ready: {} controller ports, keyboard {}",
            config.input.max_players,
            if keyboard.enabled { "enabled" } else { "disabled" }
        );

        Ok(Self {
            known_carts_path: config.known_carts_path.clone(),
            adapter: Arc::new(adapter),
            supports_keyboard: keyboard.enabled,
            requires_keyboard: keyboard.enabled && keyboard.required,
            options: CoreOptions::default(),
        })
    }

    /// Build a bridge, falling back to the cartridge database bundled in
    /// `resource_dir` when the config names none
    pub fn with_resources(config: &BridgeConfig, resource_dir: &Path) -> Result<Self, BridgeError> {
        let mut bridge = Self::new(config)?;
        bridge.known_carts_path = config.resolve_known_carts(resource_dir);
        if let Some(path) = &bridge.known_carts_path {
            tracing::info!("Known carts: {}", path.display());
        }
        Ok(bridge)
    }

    /// Load configuration from a TOML file and build a bridge
    pub fn from_config_file(path: &Path) -> Result<Self, BridgeError> {
        let config = BridgeConfig::load(path)?;
        Self::new(&config)
    }

    pub fn known_carts_path(&self) -> Option<&Path> {
        self.known_carts_path.as_deref()
    }

    pub fn set_known_carts_path(&mut self, path: Option<PathBuf>) {
        self.known_carts_path = path;
    }

    /// Input source for a host input thread
    pub fn input_source(&self) -> Arc<InputEventAdapter> {
        Arc::clone(&self.adapter)
    }

    pub fn options(&self) -> &CoreOptions {
        &self.options
    }

    pub fn get_variable(&self, name: &str) -> Option<Value> {
        self.options.get_variable(name)
    }

    /// Release all buttons, e.g. when the core restarts
    pub fn reset_input(&self) {
        self.adapter.clear();
    }

    fn host_event(&self, button: i64, player: i64, pressed: bool) -> Result<(), InputError> {
        let result = ButtonCode::try_from(button).and_then(|button| {
            let player = self.player_index(player)?;
            if pressed {
                self.adapter.on_button_press(button, player)
            } else {
                self.adapter.on_button_release(button, player)
            }
        });

        if let Err(err) = &result {
            tracing::warn!("Rejected host input: {}", err);
        }
        result
    }

    fn player_index(&self, player: i64) -> Result<usize, InputError> {
        usize::try_from(player)
            .ok()
            .filter(|p| *p < self.adapter.max_players())
            .ok_or_else(|| InputError::player(player, self.adapter.max_players()))
    }
}

impl IntellivisionResponder for BlissCoreBridge {
    fn did_push_button(&self, button: i64, player: i64) -> Result<(), InputError> {
        self.host_event(button, player, true)
    }

    fn did_release_button(&self, button: i64, player: i64) -> Result<(), InputError> {
        self.host_event(button, player, false)
    }
}

impl KeyboardResponder for BlissCoreBridge {
    fn game_supports_keyboard(&self) -> bool {
        self.supports_keyboard
    }

    fn requires_keyboard(&self) -> bool {
        self.requires_keyboard
    }

    fn key_down(&self, key_code: u16) {
        self.adapter.on_key_down(key_code);
    }

    fn key_up(&self, key_code: u16) {
        self.adapter.on_key_up(key_code);
    }
}

impl CoreInputPort for BlissCoreBridge {
    fn player_count(&self) -> usize {
        self.adapter.max_players()
    }

    fn frame_input(&self) -> Vec<InputState> {
        self.adapter.snapshot_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bliss_input::InputField;
    use std::io::Write;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    fn bridge() -> BlissCoreBridge {
        BlissCoreBridge::new(&BridgeConfig::default()).unwrap()
    }

    #[test]
    fn test_default_capabilities() {
        let bridge = bridge();
        assert!(bridge.game_supports_keyboard());
        assert!(!bridge.requires_keyboard());
        assert_eq!(bridge.player_count(), 2);
        assert!(bridge.known_carts_path().is_none());
    }

    #[test]
    fn test_raw_button_codes() {
        let bridge = bridge();
        bridge.did_push_button(ButtonCode::Enter as i64, 1).unwrap();
        assert!(bridge.frame_input()[1].is_pressed(ButtonCode::Enter));

        bridge.did_release_button(ButtonCode::Enter as i64, 1).unwrap();
        assert!(bridge.frame_input()[1].is_empty());
    }

    #[test]
    fn test_raw_out_of_range() {
        let bridge = bridge();

        let err = bridge.did_push_button(99, 0).unwrap_err();
        assert!(matches!(
            err,
            InputError::OutOfRangeInput { field: InputField::Button, value: 99, .. }
        ));

        let err = bridge.did_push_button(0, -1).unwrap_err();
        assert!(matches!(
            err,
            InputError::OutOfRangeInput { field: InputField::Player, value: -1, .. }
        ));

        assert!(bridge.did_release_button(0, 2).is_err());
        assert!(bridge.frame_input().iter().all(InputState::is_empty));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_rejected_host_input_is_logged() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let bridge = bridge();
            assert!(bridge.did_push_button(0, 5).is_err());
            assert!(bridge.did_push_button(77, 0).is_err());
            assert!(bridge.did_release_button(0, -3).is_err());
            bridge.did_push_button(0, 1).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("Rejected host input").count(), 3);
        assert!(output.contains("player index 5"));
        assert!(output.contains("button code 77"));
        assert!(output.contains("player index -3"));
    }

    #[test]
    fn test_keyboard_disabled() {
        let mut config = BridgeConfig::default();
        config.keyboard.enabled = false;
        config.keyboard.required = true;
        let bridge = BlissCoreBridge::new(&config).unwrap();

        assert!(!bridge.game_supports_keyboard());
        assert!(!bridge.requires_keyboard());

        bridge.key_down(0x1E);
        assert!(bridge.frame_input()[0].is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = BridgeConfig::default();
        config.input.max_players = 9;
        assert!(matches!(BlissCoreBridge::new(&config), Err(BridgeError::Config(_))));
    }

    #[test]
    fn test_reset_input() {
        let bridge = bridge();
        bridge.did_push_button(ButtonCode::Up as i64, 0).unwrap();
        bridge.key_down(0x28);

        bridge.reset_input();
        assert!(bridge.frame_input().iter().all(InputState::is_empty));
    }

    #[test]
    fn test_unsupported_variable() {
        assert_eq!(bridge().get_variable("anything"), None);
        assert_eq!(bridge().options().options.len(), 2);
    }
}
