//! Running-process notification
//!
//! Delivers a one-line "scripts changed" message over TCP to the
//! instrumented process, if one is listening. Delivery is best-effort: a
//! missing listener is the normal case, not a failure.

use std::io::Write;
use std::net::TcpStream;
use std::time::Duration;

use crate::core::coordinator::RunningProcessNotifier;

/// Wire message sent to the instrumented process
pub const RELOAD_SCRIPTS_MESSAGE: &str = "reload-scripts\n";

const CONNECT_TIMEOUT: Duration = Duration::from_millis(200);

/// TCP fire-and-forget notifier
pub struct TcpNotifier {
    addr: String,
}

impl TcpNotifier {
    /// Create a notifier for the given `host:port` address
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    fn try_notify(&self) -> std::io::Result<()> {
        let addrs: Vec<_> = std::net::ToSocketAddrs::to_socket_addrs(self.addr.as_str())?.collect();
        let addr = addrs.first().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "address resolved to nothing")
        })?;
        let mut stream = TcpStream::connect_timeout(addr, CONNECT_TIMEOUT)?;
        stream.write_all(RELOAD_SCRIPTS_MESSAGE.as_bytes())?;
        Ok(())
    }
}

impl RunningProcessNotifier for TcpNotifier {
    fn notify_scripts_changed(&self) {
        match self.try_notify() {
            Ok(()) => tracing::debug!("Notified running process at {}", self.addr),
            // No process attached is normal; stay quiet about it
            Err(e) => tracing::debug!("No running process notified ({}): {}", self.addr, e),
        }
    }
}
