//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, PendingCall, run_tui};
