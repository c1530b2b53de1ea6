pub mod board;
pub mod logging;
pub mod shared;

pub use board::errors::BoardError;
pub use board::storage::{FileStore, KeyValueStore, MemoryStore};
pub use board::types::{BoardEvent, Lane, LaneView, MoveRequest, Task};
pub use board::{init_board_store, BoardStore};
