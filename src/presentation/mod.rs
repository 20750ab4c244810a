pub mod console;
pub mod host;

pub use host::{Host, HostCommand};
