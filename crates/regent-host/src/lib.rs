//! Text protocol exposing a regent game session to a host process.

pub mod command;
pub mod error;
pub mod host;

pub use command::{Command, HostOption};
pub use error::HostError;
pub use host::{Host, HostConfig};
