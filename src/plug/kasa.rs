use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

use tokio::task;
use tokio::time;
use tplinker::capabilities::{DeviceActions, Switch};
use tplinker::devices::HS100;
use tplinker::error::Error as DeviceError;

use super::{Plug, PlugError, PlugStatus};

/// TCP port Kasa devices listen on.
const KASA_PORT: u16 = 9999;

/// Production transport: drives a Kasa smart plug through the `tplinker`
/// crate. `tplinker` is synchronous, so each operation runs on the
/// blocking pool, bounded by the configured timeout.
pub struct KasaPlug {
    addr: SocketAddr,
    timeout: Duration,
    verbose: bool,
}

impl KasaPlug {
    pub fn new(ip: IpAddr, timeout: Duration, verbose: bool) -> Self {
        KasaPlug {
            addr: SocketAddr::new(ip, KASA_PORT),
            timeout,
            verbose,
        }
    }

    // `HS100::new` returns `HS100<DefaultProtocol>`, but tplinker keeps
    // `DefaultProtocol` in a private module, so the device type cannot be
    // written out here. Taking the constructor as an argument lets
    // inference pin down `D` without naming it.
    async fn call<T, D, F>(
        &self,
        op_name: &str,
        connect: fn(&str) -> Result<D, AddrParseError>,
        op: F,
    ) -> Result<T, PlugError>
    where
        T: Send + 'static,
        D: 'static,
        F: FnOnce(&D) -> Result<T, DeviceError> + Send + 'static,
    {
        if self.verbose {
            eprintln!("-> {} {}", op_name, self.addr);
        }

        let addr = self.addr;
        let handle = task::spawn_blocking(move || {
            // addr is an already-parsed SocketAddr, so this cannot fail in
            // practice, but HS100::new re-parses it from a string.
            let device =
                connect(&addr.to_string()).map_err(|err| DeviceError::Other(err.to_string()))?;
            op(&device)
        });

        match time::timeout(self.timeout, handle).await {
            Ok(joined) => Ok(joined??),
            Err(_) => Err(PlugError::Timeout(self.timeout)),
        }
    }
}

impl Plug for KasaPlug {
    async fn refresh(&self) -> Result<PlugStatus, PlugError> {
        let info = self
            .call("get_sysinfo", HS100::new, |device| device.sysinfo())
            .await?;
        let relay_state = info.relay_state.ok_or(PlugError::NoRelayState)?;

        Ok(PlugStatus {
            is_on: relay_state > 0,
            alias: info.alias,
            model: info.model,
        })
    }

    async fn turn_on(&self) -> Result<(), PlugError> {
        self.call("set_relay_state:1", HS100::new, |device| device.switch_on())
            .await
    }

    async fn turn_off(&self) -> Result<(), PlugError> {
        self.call("set_relay_state:0", HS100::new, |device| device.switch_off())
            .await
    }
}
