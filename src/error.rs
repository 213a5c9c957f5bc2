use crate::plug::PlugError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error controlling {device} at IP {ip}: {source}")]
    Control {
        device: &'static str,
        ip: String,
        #[source]
        source: PlugError,
    },

    #[error("{0}")]
    InvalidInput(String),
}

impl AppError {
    pub fn control(device: &'static str, ip: &str, source: PlugError) -> Self {
        AppError::Control {
            device,
            ip: ip.to_string(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Control { source, .. } => match source {
                PlugError::Timeout(_) => 4,
                PlugError::Device(tplinker::error::Error::IO(_)) => 4,
                _ => 1,
            },
            AppError::InvalidInput(_) => 2,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Control { .. } => "control",
            AppError::InvalidInput(_) => "invalid_input",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timeout_is_reported_as_unreachable() {
        let err = AppError::control("PS5", "10.0.0.5", PlugError::Timeout(Duration::from_secs(15)));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn connect_failure_is_reported_as_unreachable() {
        let io = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        let err = AppError::control("XBOX", "10.0.0.6", tplinker::error::Error::IO(io).into());
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn protocol_failure_is_a_generic_control_error() {
        let err = AppError::control("PC", "10.0.0.7", PlugError::NoRelayState);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn invalid_input_uses_usage_exit_code() {
        let err = AppError::InvalidInput("invalid IP address: nope".into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn control_message_names_device_and_ip() {
        let err = AppError::control("PS5", "10.0.0.5", PlugError::NoRelayState);
        let msg = err.to_string();
        assert!(msg.contains("PS5"));
        assert!(msg.contains("10.0.0.5"));
    }

    #[test]
    fn json_shape_has_error_type_and_message() {
        let err = AppError::InvalidInput("invalid IP address: nope".into());
        let json = err.to_json();
        assert_eq!(json["error"], "invalid_input");
        assert!(json["message"].as_str().unwrap().contains("nope"));
    }
}
