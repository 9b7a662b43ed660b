//! Logging utilities.
//!
//! The library itself only talks to the `log` facade. Front ends that want
//! output call [`init_logging`] once, early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
