#![cfg(feature = "std")]

use crate::error::Result;
use crate::protocol::{OrderKind, TurnSnapshot};
use crate::sequencer::TurnSequencer;
use crate::transport::Transport;

/// Named orders over a borrowed [`TurnSequencer`].
///
/// Holds no state of its own; every method is a direct forward to
/// [`TurnSequencer::issue`].
pub struct Controller<'a, T: Transport> {
    sequencer: &'a mut TurnSequencer<T>,
}

impl<'a, T: Transport> Controller<'a, T> {
    pub fn new(sequencer: &'a mut TurnSequencer<T>) -> Self {
        Self { sequencer }
    }

    /// Turn counter of the underlying sequencer.
    pub fn current_turn(&self) -> u32 {
        self.sequencer.current_turn()
    }

    /// Announce readiness and read the surroundings. Must start every turn.
    pub async fn get_ready(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::GetReady).await
    }

    /// Move one cell up.
    pub async fn walk_up(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::WalkUp).await
    }

    /// Move one cell down.
    pub async fn walk_down(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::WalkDown).await
    }

    /// Move one cell left.
    pub async fn walk_left(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::WalkLeft).await
    }

    /// Move one cell right.
    pub async fn walk_right(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::WalkRight).await
    }

    /// The 3x3 square above the player.
    pub async fn look_up(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::LookUp).await
    }

    /// The 3x3 square below the player.
    pub async fn look_down(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::LookDown).await
    }

    /// The 3x3 square left of the player.
    pub async fn look_left(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::LookLeft).await
    }

    /// The 3x3 square right of the player.
    pub async fn look_right(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::LookRight).await
    }

    /// Nine cells in a straight line upward.
    pub async fn search_up(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::SearchUp).await
    }

    /// Nine cells in a straight line downward.
    pub async fn search_down(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::SearchDown).await
    }

    /// Nine cells in a straight line to the left.
    pub async fn search_left(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::SearchLeft).await
    }

    /// Nine cells in a straight line to the right.
    pub async fn search_right(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::SearchRight).await
    }

    /// Place a block above the player.
    pub async fn put_up(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::PutUp).await
    }

    /// Place a block below the player.
    pub async fn put_down(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::PutDown).await
    }

    /// Place a block left of the player.
    pub async fn put_left(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::PutLeft).await
    }

    /// Place a block right of the player.
    pub async fn put_right(&mut self) -> Result<TurnSnapshot> {
        self.sequencer.issue(OrderKind::PutRight).await
    }
}
