#![cfg(feature = "std")]

use std::time::Duration;

/// Default timeout for establishing the TCP connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for a single read or write (30 seconds).
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to connect and how patiently to talk to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    /// Display name sent in the handshake.
    pub name: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    /// Render each turn to the console instead of only logging it.
    pub log_turns: bool,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16, name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            name: name.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_IO_TIMEOUT,
            write_timeout: DEFAULT_IO_TIMEOUT,
            log_turns: true,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    pub fn with_log_turns(mut self, log_turns: bool) -> Self {
        self.log_turns = log_turns;
        self
    }

    /// `host:port`, as used in log lines and connect errors.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
