//! `fightbook` - A fighter roster and ranking tracker
//!
//! This library provides the core functionality for tracking fighters
//! within weight classes: win/loss records, rankings, fight histories,
//! and snapshot persistence of the whole roster.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod fighter;
pub mod logging;
pub mod roster;
pub mod snapshot;

pub use config::Config;
pub use error::{Error, Result};
pub use fighter::{FightEntry, Fighter, Ranking};
pub use logging::{init_logging, Verbosity};
pub use roster::Roster;
