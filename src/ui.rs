#![cfg(feature = "std")]

use crate::observer::TurnObserver;
use crate::protocol::{FieldCell, OrderKind, TurnSnapshot, GRID_SIDE};

fn cell_glyph(cell: FieldCell) -> &'static str {
    match cell {
        FieldCell::Empty => "[　]",
        FieldCell::Block => "[□]",
        FieldCell::Item => "[☆]",
        FieldCell::Enemy => "[×]",
    }
}

/// Draw a reply the way it was scanned: three rows for square replies, a
/// single row of nine for search replies.
pub fn render_snapshot(order: OrderKind, snapshot: &TurnSnapshot) -> String {
    let row_len = if order.is_linear() {
        snapshot.cells().len()
    } else {
        GRID_SIDE
    };
    let mut out = String::new();
    for row in snapshot.cells().chunks(row_len) {
        for &cell in row {
            out.push_str(cell_glyph(cell));
        }
        out.push('\n');
    }
    out
}

/// Prints every turn to stdout.
pub struct ConsoleObserver;

impl TurnObserver for ConsoleObserver {
    fn on_turn(&mut self, order: OrderKind, turn: u32, snapshot: &TurnSnapshot) {
        if order.is_readiness() {
            std::println!("************************************\n");
        }
        std::println!("Turn {}: {}", turn, order);
        std::println!("{}", render_snapshot(order, snapshot));
    }

    fn on_game_over(&mut self, turn: u32) {
        std::println!("************************************");
        std::println!("Game Set!! (turn {})", turn);
    }
}
