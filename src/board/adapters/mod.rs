//! Adapter implementations for the board catalog port.

mod arduino_cli;
mod memory;

pub use arduino_cli::{ArduinoCliBoardCatalog, parse_board_list};
pub use memory::InMemoryBoardCatalog;
