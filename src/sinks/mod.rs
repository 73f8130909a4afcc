mod memory;
mod stdout;

pub use memory::MemorySink;
pub use stdout::{StdoutSink, write_line};
