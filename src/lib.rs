pub mod cli;
pub mod config;
pub mod control;
pub mod error;
pub mod plug;

use std::net::IpAddr;
use std::time::Duration;

use cli::output::{print_error, print_outcome};
use config::{OutputMode, RuntimeConfig};
use error::AppError;
use plug::KasaPlug;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig {
        output_mode: if cli_args.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        verbose: cli_args.verbose,
        timeout: Duration::from_secs(cli_args.timeout_secs),
    };

    let result = dispatch(&cli_args, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err, config.output_mode);
            err.exit_code()
        }
    }
}

async fn dispatch(cli_args: &cli::Cli, config: &RuntimeConfig) -> Result<(), AppError> {
    let ip: IpAddr = cli_args
        .ip
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("invalid IP address: {}", cli_args.ip)))?;

    let plug = KasaPlug::new(ip, config.timeout, config.verbose);
    let outcome =
        control::control_device(&plug, cli_args.device, &cli_args.ip, cli_args.action).await?;

    print_outcome(&outcome, config.output_mode);
    Ok(())
}
