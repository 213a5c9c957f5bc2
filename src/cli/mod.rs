pub mod output;

use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "plugctl",
    version,
    about = "Power-cycle game consoles through TP-Link Kasa smart plugs"
)]
pub struct Cli {
    /// Device to control
    #[arg(value_enum, ignore_case = true)]
    pub device: DeviceLabel,

    /// Action to perform
    #[arg(value_enum, ignore_case = true)]
    pub action: Action,

    /// IP address of the device's smart plug
    #[arg(long)]
    pub ip: String,

    /// Output as JSON instead of a human-readable line
    #[arg(long)]
    pub json: bool,

    /// Verbose output (trace network operations on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Seconds to wait for each network operation
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,
}

/// Friendly names for the consoles plugged into the smart plugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceLabel {
    Ps5,
    Xbox,
    Switch,
    Pc,
}

impl DeviceLabel {
    /// Uppercase form used in status lines and error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            DeviceLabel::Ps5 => "PS5",
            DeviceLabel::Xbox => "XBOX",
            DeviceLabel::Switch => "SWITCH",
            DeviceLabel::Pc => "PC",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    On,
    Off,
    Status,
}
