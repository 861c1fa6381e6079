#![cfg(feature = "std")]

use crate::controller::Controller;
use crate::error::{ChaserError, Desync, Result};
use crate::observer::{NoopObserver, TurnObserver};
use crate::protocol::{
    decode_frame, decode_turn_start_signal, encode_control_ack, encode_order, GameStatus,
    OrderKind, TurnSnapshot,
};
use crate::transport::Transport;

/// Where the sequencer is within the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Next call must be `GetReady`, which consumes the turn-start signal.
    AwaitingReadiness,
    /// Readiness was announced; one action order may be issued.
    AwaitingOrderResult,
    /// The server reported the end of the game.
    GameOver,
    /// An error left the connection unusable.
    Closed,
}

/// Drives one connection through the readiness / order / acknowledge cycle.
pub struct TurnSequencer<T: Transport> {
    transport: T,
    phase: Phase,
    turn: u32,
    observer: Box<dyn TurnObserver>,
}

impl<T: Transport> TurnSequencer<T> {
    pub fn new(transport: T) -> Self {
        Self::with_observer(transport, Box::new(NoopObserver))
    }

    pub fn with_observer(transport: T, observer: Box<dyn TurnObserver>) -> Self {
        Self {
            transport,
            phase: Phase::AwaitingReadiness,
            turn: 1,
            observer,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn counter. Starts at 1 and grows by one per consumed turn-start
    /// signal.
    pub fn current_turn(&self) -> u32 {
        self.turn
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Named-order view over this sequencer.
    pub fn controller(&mut self) -> Controller<'_, T> {
        Controller::new(self)
    }

    /// Perform one protocol exchange for `order`.
    ///
    /// On success the returned snapshot is always `InProgress`. A finished
    /// game yields [`ChaserError::GameFinished`] and moves to
    /// [`Phase::GameOver`]; any other failure moves to [`Phase::Closed`] and
    /// the caller must close the connection.
    pub async fn issue(&mut self, order: OrderKind) -> Result<TurnSnapshot> {
        match self.phase {
            Phase::GameOver => return Err(ChaserError::GameFinished),
            Phase::Closed => return Err(ChaserError::NotConnected),
            Phase::AwaitingReadiness | Phase::AwaitingOrderResult => {}
        }

        match self.exchange(order).await {
            Ok(snapshot) => {
                self.observer.on_turn(order, self.turn.saturating_sub(1), &snapshot);
                Ok(snapshot)
            }
            Err(ChaserError::GameFinished) => {
                self.phase = Phase::GameOver;
                self.observer.on_game_over(self.turn.saturating_sub(1));
                Err(ChaserError::GameFinished)
            }
            Err(e) => {
                log::warn!("{} failed on turn {}: {}", order, self.turn, e);
                self.phase = Phase::Closed;
                Err(e)
            }
        }
    }

    async fn exchange(&mut self, order: OrderKind) -> Result<TurnSnapshot> {
        if order.is_readiness() {
            if self.phase != Phase::AwaitingReadiness {
                return Err(Desync::ReadinessRepeated.into());
            }
            let signal = self.transport.recv().await?;
            if !decode_turn_start_signal(&signal) {
                return Err(Desync::MissingTurnStart(signal.first().copied()).into());
            }
            self.turn += 1;
            self.phase = Phase::AwaitingOrderResult;
        } else if self.phase != Phase::AwaitingOrderResult {
            return Err(Desync::OrderBeforeReadiness(order).into());
        }

        self.transport.send(encode_order(order).as_bytes()).await?;
        log::debug!("turn {}: sent {}", self.turn, order.code());

        let reply = self.transport.recv().await?;
        let frame = decode_frame(&reply)?;

        // The turn is closed out whatever the status digit says.
        if !order.is_readiness() {
            self.transport.send(encode_control_ack().as_bytes()).await?;
        }

        // Game over is decided by the status digit alone; cells only carry
        // meaning while the game is running.
        if GameStatus::from_digit(frame.status) == Some(GameStatus::Finished) {
            return Err(ChaserError::GameFinished);
        }
        let snapshot = TurnSnapshot::try_from(frame)?;
        if !order.is_readiness() {
            self.phase = Phase::AwaitingReadiness;
        }
        Ok(snapshot)
    }

    /// Close the underlying connection. Safe to call in any phase, and more
    /// than once.
    pub async fn close(&mut self) {
        self.transport.close().await;
        if self.phase != Phase::GameOver {
            self.phase = Phase::Closed;
        }
    }

    pub fn into_inner(self) -> T {
        self.transport
    }
}
