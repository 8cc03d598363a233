// Cube vocabulary shared by the capture, solve and formatting steps

pub mod notation;
pub mod state;

pub use notation::{Face, Move, NotationTable, Turn, UnknownMove};
pub use state::{CubeState, FACELET_COUNT};
