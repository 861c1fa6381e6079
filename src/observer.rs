#![cfg(feature = "std")]

use crate::protocol::{OrderKind, TurnSnapshot};

/// Receives a read-only view of every decoded reply.
///
/// The sequencer calls it after its own state has been updated, so nothing
/// an observer does can change the protocol flow.
pub trait TurnObserver: Send {
    /// `turn` counts consumed turn-start signals, starting at 1.
    fn on_turn(&mut self, order: OrderKind, turn: u32, snapshot: &TurnSnapshot);

    fn on_game_over(&mut self, _turn: u32) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {
    fn on_turn(&mut self, _order: OrderKind, _turn: u32, _snapshot: &TurnSnapshot) {}
}

/// Reports turns through the `log` facade.
pub struct LogObserver;

impl TurnObserver for LogObserver {
    fn on_turn(&mut self, order: OrderKind, turn: u32, snapshot: &TurnSnapshot) {
        let digits: String = snapshot
            .cells()
            .iter()
            .map(|cell| char::from(b'0' + cell.digit()))
            .collect();
        log::info!("Turn {}: {} -> {}", turn, order, digits);
    }

    fn on_game_over(&mut self, turn: u32) {
        log::info!("Game finished on turn {}", turn);
    }
}
