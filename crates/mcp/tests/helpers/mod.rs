#![allow(dead_code)]

mod fixtures;
mod mock_ports;
mod state;

pub use fixtures::*;
pub use mock_ports::*;
pub use state::*;
