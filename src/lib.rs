#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod fleet;
mod game;
mod position;
mod ship;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use position::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
