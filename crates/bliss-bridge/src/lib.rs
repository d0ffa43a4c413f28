//! Host frontend bridge for the Bliss Intellivision core
//!
//! Exposes the core to a plugin host: controller button and keyboard
//! responders on the host side, a per-frame input port on the core side,
//! plus the known-carts path and core options the host passes through.
//!
//! # Example
//!
//! ```
//! use bliss_bridge::{BlissCoreBridge, CoreInputPort, IntellivisionResponder};
//! use bliss_config::BridgeConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let bridge = BlissCoreBridge::new(&BridgeConfig::default())?;
//!
//!     // Host input thread: keypad 1 on the left controller
//!     bridge.did_push_button(4, 0)?;
//!
//!     // Emulation thread, once per frame
//!     let frame = bridge.frame_input();
//!     assert_eq!(frame.len(), 2);
//!     assert!(!frame[0].is_empty());
//!     Ok(())
//! }
//! ```

mod bridge;
mod responder;

pub use bridge::BlissCoreBridge;
pub use responder::{CoreInputPort, IntellivisionResponder, KeyboardResponder};

use bliss_config::ConfigError;
use bliss_input::InputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
