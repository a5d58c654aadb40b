pub mod stdio;

pub use stdio::start_stdio_server;
