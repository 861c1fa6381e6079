#![cfg(feature = "std")]

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::time::{timeout, Duration};

use crate::config::{ClientConfig, DEFAULT_IO_TIMEOUT};
use crate::error::{ChaserError, Result};
use crate::protocol::{encode_handshake, RECV_BUFFER_SIZE};
use crate::transport::Transport;

/// The single TCP connection a client holds to the game server.
pub struct TcpConnection {
    stream: Option<TcpStream>,
    peer: String,
    name: String,
    read_timeout: Duration,
    write_timeout: Duration,
    closed: Arc<watch::Sender<bool>>,
    closed_rx: watch::Receiver<bool>,
}

/// Closes a [`TcpConnection`] from outside the task that owns it.
///
/// A `recv` pending on the connection wakes up and fails instead of waiting
/// for the server.
#[derive(Clone)]
pub struct CloseHandle {
    closed: Arc<watch::Sender<bool>>,
}

impl CloseHandle {
    pub fn close(&self) {
        self.closed.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }
}

impl TcpConnection {
    /// Wrap an already connected stream. No handshake is sent.
    pub fn new(stream: TcpStream) -> Self {
        Self::with_timeouts(stream, DEFAULT_IO_TIMEOUT, DEFAULT_IO_TIMEOUT)
    }

    pub fn with_timeouts(stream: TcpStream, read_timeout: Duration, write_timeout: Duration) -> Self {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "<unknown>".to_string());
        let (closed, closed_rx) = watch::channel(false);
        Self {
            stream: Some(stream),
            peer,
            name: String::new(),
            read_timeout,
            write_timeout,
            closed: Arc::new(closed),
            closed_rx,
        }
    }

    /// Connect with default timeouts and announce `name`.
    pub async fn connect(host: &str, port: u16, name: &str) -> Result<Self> {
        Self::connect_with(&ClientConfig::new(host, port, name)).await
    }

    /// Open the TCP stream described by `config` and send the name handshake.
    pub async fn connect_with(config: &ClientConfig) -> Result<Self> {
        let addr = config.addr();
        let handshake = encode_handshake(&config.name)
            .map_err(|e| ChaserError::connect(&addr, io::Error::new(io::ErrorKind::InvalidInput, e)))?;

        let stream = timeout(
            config.connect_timeout,
            TcpStream::connect((config.host.as_str(), config.port)),
        )
        .await
        .map_err(|_| {
            ChaserError::connect(
                &addr,
                io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("connect timeout after {:?}", config.connect_timeout),
                ),
            )
        })?
        .map_err(|e| {
            log::warn!("Failed to connect to CHaser server at {}: {}", addr, e);
            ChaserError::connect(&addr, e)
        })?;

        if let Err(e) = stream.set_nodelay(true) {
            log::warn!("Failed to set TCP_NODELAY: {}", e);
        }

        let mut conn = Self::with_timeouts(stream, config.read_timeout, config.write_timeout);
        conn.name = config.name.clone();
        conn.send(handshake.as_bytes()).await.map_err(|e| match e {
            ChaserError::Io(source) => ChaserError::connect(&addr, source),
            other => other,
        })?;

        log::info!("Connected to {} as {:?}, waiting for the game to start", addr, config.name);
        Ok(conn)
    }

    pub fn close_handle(&self) -> CloseHandle {
        CloseHandle {
            closed: Arc::clone(&self.closed),
        }
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Display name sent in the handshake; empty for wrapped streams.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn stream_mut(&mut self) -> Result<&mut TcpStream> {
        if *self.closed_rx.borrow() {
            self.stream = None;
        }
        self.stream.as_mut().ok_or_else(|| {
            ChaserError::Io(io::Error::new(
                io::ErrorKind::NotConnected,
                "connection is closed",
            ))
        })
    }
}

#[async_trait::async_trait]
impl Transport for TcpConnection {
    async fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let write_timeout = self.write_timeout;
        let stream = self.stream_mut()?;

        timeout(write_timeout, stream.write_all(bytes))
            .await
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("send timeout after {:?}", write_timeout),
                )
            })??;

        log::trace!("sent {:?}", String::from_utf8_lossy(bytes));
        Ok(())
    }

    async fn recv(&mut self) -> Result<Vec<u8>> {
        let read_timeout = self.read_timeout;
        let mut closed = self.closed_rx.clone();
        let stream = self.stream_mut()?;

        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        let n = tokio::select! {
            _ = closed.wait_for(|closed| *closed) => {
                return Err(ChaserError::Io(io::Error::new(
                    io::ErrorKind::ConnectionAborted,
                    "connection closed while waiting for the server",
                )));
            }
            read = timeout(read_timeout, stream.read(&mut buf)) => {
                read.map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("receive timeout after {:?}", read_timeout),
                    )
                })??
            }
        };

        if n == 0 {
            return Err(ChaserError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed by peer",
            )));
        }
        buf.truncate(n);
        log::trace!("received {:?}", String::from_utf8_lossy(&buf));
        Ok(buf)
    }

    async fn close(&mut self) {
        self.closed.send_replace(true);
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.shutdown().await;
            log::debug!("Closed connection to {}", self.peer);
        }
    }

    fn is_open(&self) -> bool {
        self.stream.is_some() && !*self.closed_rx.borrow()
    }
}
