//! Interactive menu with cliclack (Charm-style inline prompts) or plain line prompts
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod clack;
#[cfg(feature = "tui")]
mod console;
#[cfg(feature = "tui")]
mod menu;
#[cfg(feature = "tui")]
mod plain;

#[cfg(feature = "tui")]
pub use clack::ClackConsole;
#[cfg(feature = "tui")]
pub use console::{Console, MenuChoice};
#[cfg(feature = "tui")]
pub use menu::{run, run_with, MenuArgs};
#[cfg(feature = "tui")]
pub use plain::PlainConsole;
