use crate::error::Result;

/// Byte-level connection to a CHaser server.
///
/// Implementations know nothing about turns or order codes; framing is left
/// to the protocol layer. Each `recv` returns whatever a single read produced.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, bytes: &[u8]) -> Result<()>;
    async fn recv(&mut self) -> Result<Vec<u8>>;
    /// Release the connection. Safe to call more than once.
    async fn close(&mut self);
    fn is_open(&self) -> bool;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).send(bytes).await
    }

    async fn recv(&mut self) -> Result<Vec<u8>> {
        (**self).recv().await
    }

    async fn close(&mut self) {
        (**self).close().await
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

#[cfg(feature = "std")]
pub mod tcp;
#[cfg(feature = "std")]
pub mod in_memory;
