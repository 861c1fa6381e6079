use core::fmt;

/// One of the four compass directions an order can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Group an order belongs to. Decides how the reply is laid out and whether
/// the order ends with a turn-end acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderFamily {
    /// The "announce readiness" pseudo-order.
    Readiness,
    Walk,
    /// Square 3x3 look ahead of the player.
    Look,
    /// Straight-line look of nine cells.
    Search,
    /// Place a block next to the player.
    Put,
}

/// Every order the client can issue: sixteen actions plus `GetReady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    GetReady,
    WalkUp,
    WalkDown,
    WalkLeft,
    WalkRight,
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
    SearchUp,
    SearchDown,
    SearchLeft,
    SearchRight,
    PutUp,
    PutDown,
    PutLeft,
    PutRight,
}

impl OrderKind {
    /// All seventeen kinds, readiness first.
    pub const ALL: [OrderKind; 17] = [
        OrderKind::GetReady,
        OrderKind::WalkUp,
        OrderKind::WalkDown,
        OrderKind::WalkLeft,
        OrderKind::WalkRight,
        OrderKind::LookUp,
        OrderKind::LookDown,
        OrderKind::LookLeft,
        OrderKind::LookRight,
        OrderKind::SearchUp,
        OrderKind::SearchDown,
        OrderKind::SearchLeft,
        OrderKind::SearchRight,
        OrderKind::PutUp,
        OrderKind::PutDown,
        OrderKind::PutLeft,
        OrderKind::PutRight,
    ];

    /// Build an action order from its family and direction.
    ///
    /// Returns `None` for [`OrderFamily::Readiness`], which has no direction.
    pub const fn new(family: OrderFamily, direction: Direction) -> Option<Self> {
        use Direction::*;
        use OrderKind::*;
        let kind = match (family, direction) {
            (OrderFamily::Readiness, _) => return None,
            (OrderFamily::Walk, Up) => WalkUp,
            (OrderFamily::Walk, Down) => WalkDown,
            (OrderFamily::Walk, Left) => WalkLeft,
            (OrderFamily::Walk, Right) => WalkRight,
            (OrderFamily::Look, Up) => LookUp,
            (OrderFamily::Look, Down) => LookDown,
            (OrderFamily::Look, Left) => LookLeft,
            (OrderFamily::Look, Right) => LookRight,
            (OrderFamily::Search, Up) => SearchUp,
            (OrderFamily::Search, Down) => SearchDown,
            (OrderFamily::Search, Left) => SearchLeft,
            (OrderFamily::Search, Right) => SearchRight,
            (OrderFamily::Put, Up) => PutUp,
            (OrderFamily::Put, Down) => PutDown,
            (OrderFamily::Put, Left) => PutLeft,
            (OrderFamily::Put, Right) => PutRight,
        };
        Some(kind)
    }

    pub const fn family(self) -> OrderFamily {
        use OrderKind::*;
        match self {
            GetReady => OrderFamily::Readiness,
            WalkUp | WalkDown | WalkLeft | WalkRight => OrderFamily::Walk,
            LookUp | LookDown | LookLeft | LookRight => OrderFamily::Look,
            SearchUp | SearchDown | SearchLeft | SearchRight => OrderFamily::Search,
            PutUp | PutDown | PutLeft | PutRight => OrderFamily::Put,
        }
    }

    pub const fn direction(self) -> Option<Direction> {
        use OrderKind::*;
        match self {
            GetReady => None,
            WalkUp | LookUp | SearchUp | PutUp => Some(Direction::Up),
            WalkDown | LookDown | SearchDown | PutDown => Some(Direction::Down),
            WalkLeft | LookLeft | SearchLeft | PutLeft => Some(Direction::Left),
            WalkRight | LookRight | SearchRight | PutRight => Some(Direction::Right),
        }
    }

    /// True for the readiness pseudo-order.
    pub const fn is_readiness(self) -> bool {
        matches!(self, OrderKind::GetReady)
    }

    /// True when the reply is a straight line of cells rather than a 3x3 grid.
    pub const fn is_linear(self) -> bool {
        matches!(self.family(), OrderFamily::Search)
    }

    /// Wire code for this order, without terminator.
    pub const fn code(self) -> &'static str {
        use OrderKind::*;
        match self {
            GetReady => "gr",
            WalkUp => "wu",
            WalkDown => "wd",
            WalkLeft => "wl",
            WalkRight => "wr",
            LookUp => "lu",
            LookDown => "ld",
            LookLeft => "ll",
            LookRight => "lr",
            SearchUp => "su",
            SearchDown => "sd",
            SearchLeft => "sl",
            SearchRight => "sr",
            PutUp => "pu",
            PutDown => "pd",
            PutLeft => "pl",
            PutRight => "pr",
        }
    }

    /// Reverse lookup of [`OrderKind::code`].
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_and_direction_rebuild_the_order() {
        for kind in OrderKind::ALL {
            match kind.direction() {
                Some(dir) => assert_eq!(OrderKind::new(kind.family(), dir), Some(kind)),
                None => assert!(kind.is_readiness()),
            }
        }
    }

    #[test]
    fn every_kind_has_a_distinct_code() {
        for (i, a) in OrderKind::ALL.iter().enumerate() {
            assert_eq!(a.code().len(), 2);
            for b in &OrderKind::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn only_search_orders_are_linear() {
        assert!(OrderKind::SearchLeft.is_linear());
        assert!(!OrderKind::LookLeft.is_linear());
        assert!(!OrderKind::GetReady.is_linear());
    }
}
