mod kasa;

pub use kasa::KasaPlug;

use serde::Serialize;
use std::time::Duration;

/// Snapshot of a plug's state from one refresh round trip.
#[derive(Debug, Clone)]
pub struct PlugStatus {
    pub is_on: bool,
    pub alias: String,
    pub model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    Off,
}

impl PowerState {
    pub fn from_on(is_on: bool) -> Self {
        if is_on {
            PowerState::On
        } else {
            PowerState::Off
        }
    }

    /// Uppercase form used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            PowerState::On => "ON",
            PowerState::Off => "OFF",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlugError {
    #[error("device did not respond within {0:?}")]
    Timeout(Duration),

    #[error("device reported no relay state")]
    NoRelayState,

    #[error(transparent)]
    Device(#[from] tplinker::error::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Seam between the controller and the network so tests can substitute
/// a fake device.
#[allow(async_fn_in_trait)]
pub trait Plug {
    /// Fetch the plug's current state. One network round trip.
    async fn refresh(&self) -> Result<PlugStatus, PlugError>;

    /// Switch the relay on. One network round trip.
    async fn turn_on(&self) -> Result<(), PlugError>;

    /// Switch the relay off. One network round trip.
    async fn turn_off(&self) -> Result<(), PlugError>;
}
