/// Line terminator appended to every client → server message.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Control byte the server sends at the start of each turn.
pub const TURN_START: u8 = b'@';

/// Control code the client sends after every non-readiness order's reply.
pub const TURN_END: &str = "#";

/// Number of cells in a neighbourhood snapshot.
pub const SNAPSHOT_CELLS: usize = 9;

/// Length of an order reply: one status digit followed by the cells.
pub const RESPONSE_LEN: usize = 1 + SNAPSHOT_CELLS;

/// Receive buffer size; comfortably larger than any protocol message.
pub const RECV_BUFFER_SIZE: usize = 4096;

/// Side length of the square neighbourhood returned by square-pattern orders.
pub const GRID_SIDE: usize = 3;
