#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::error::{ChaserError, Result};
use crate::transport::Transport;

type Queue = Arc<Mutex<VecDeque<Vec<u8>>>>;

/// One end of an in-process byte pipe. Each `send` is delivered as exactly
/// one `recv` chunk on the other end, so tests control read boundaries.
pub struct InMemoryTransport {
    recv_queue: Option<Queue>,
    send_queue: Option<Queue>,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let q1 = Arc::new(Mutex::new(VecDeque::new()));
        let q2 = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                recv_queue: Some(q1.clone()),
                send_queue: Some(q2.clone()),
            },
            Self {
                recv_queue: Some(q2),
                send_queue: Some(q1),
            },
        )
    }

    /// Chunks sent by the peer that have not been received yet.
    pub fn pending(&self) -> usize {
        self.recv_queue
            .as_ref()
            .and_then(|queue| queue.lock().ok().map(|q| q.len()))
            .unwrap_or(0)
    }
}

fn closed(what: &str) -> ChaserError {
    ChaserError::Io(io::Error::new(io::ErrorKind::NotConnected, what.to_string()))
}

fn poisoned() -> ChaserError {
    ChaserError::Io(io::Error::other("in-memory queue poisoned"))
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let queue = self.send_queue.as_ref().ok_or_else(|| closed("transport is closed"))?;
        // Peer gone: nobody left to read.
        if Arc::strong_count(queue) == 1 {
            return Err(ChaserError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "peer closed the channel",
            )));
        }
        queue.lock().map_err(|_| poisoned())?.push_back(bytes.to_vec());
        Ok(())
    }

    async fn recv(&mut self) -> Result<Vec<u8>> {
        let queue = self
            .recv_queue
            .clone()
            .ok_or_else(|| closed("transport is closed"))?;
        loop {
            if let Some(chunk) = {
                let mut q = queue.lock().map_err(|_| poisoned())?;
                q.pop_front()
            } {
                return Ok(chunk);
            }
            // Our own clone plus the field: the peer has dropped its end.
            if Arc::strong_count(&queue) <= 2 {
                return Err(ChaserError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "channel closed",
                )));
            }
            yield_now().await;
        }
    }

    async fn close(&mut self) {
        self.recv_queue = None;
        self.send_queue = None;
    }

    fn is_open(&self) -> bool {
        self.recv_queue.is_some()
    }
}
