use serde::Serialize;

use crate::cli::{Action, DeviceLabel};
use crate::error::AppError;
use crate::plug::{Plug, PowerState};

/// Typed result of one control invocation. `changed` is false when the
/// plug was already in the requested state.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub device: &'static str,
    pub ip: String,
    pub action: Action,
    pub power: PowerState,
    pub changed: bool,
}

/// Refresh the plug once, then issue at most one mutating command.
///
/// `on` and `off` are idempotent: a plug already in the requested state is
/// left untouched. Every transport failure is wrapped with the device label
/// and IP so the caller can report it without extra context.
pub async fn control_device<P: Plug>(
    plug: &P,
    device: DeviceLabel,
    ip: &str,
    action: Action,
) -> Result<Outcome, AppError> {
    let name = device.display_name();

    let status = plug
        .refresh()
        .await
        .map_err(|err| AppError::control(name, ip, err))?;

    let (power, changed) = match action {
        Action::On => {
            if status.is_on {
                (PowerState::On, false)
            } else {
                plug.turn_on()
                    .await
                    .map_err(|err| AppError::control(name, ip, err))?;
                (PowerState::On, true)
            }
        }
        Action::Off => {
            if status.is_on {
                plug.turn_off()
                    .await
                    .map_err(|err| AppError::control(name, ip, err))?;
                (PowerState::Off, true)
            } else {
                (PowerState::Off, false)
            }
        }
        Action::Status => (PowerState::from_on(status.is_on), false),
    };

    Ok(Outcome {
        device: name,
        ip: ip.to_string(),
        action,
        power,
        changed,
    })
}
