use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::protocol::{Direction, FieldCell, OrderFamily, OrderKind, TurnSnapshot};

/// Chooses the action for a turn from the readiness reply.
pub trait Player: Send {
    fn next_order(&mut self, rng: &mut SmallRng, surroundings: &TurnSnapshot) -> OrderKind;
}

/// Sample player for the bundled driver: steps onto a visible item, otherwise
/// wanders in a random direction that is not blocked.
#[derive(Debug, Default)]
pub struct RandomWalker;

impl RandomWalker {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomWalker {
    fn next_order(&mut self, rng: &mut SmallRng, surroundings: &TurnSnapshot) -> OrderKind {
        let walk = |dir| OrderKind::new(OrderFamily::Walk, dir).unwrap_or(OrderKind::WalkUp);

        if let Some(&dir) = Direction::ALL
            .iter()
            .find(|&&dir| surroundings.neighbor(dir) == FieldCell::Item)
        {
            return walk(dir);
        }

        let open: Vec<Direction> = Direction::ALL
            .iter()
            .copied()
            .filter(|&dir| surroundings.neighbor(dir) != FieldCell::Block)
            .collect();
        match open.choose(rng) {
            Some(&dir) => walk(dir),
            // Boxed in: look around instead of walking into a wall.
            None => OrderKind::LookUp,
        }
    }
}
