#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod cell;
mod common;
mod config;
pub mod coord;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod menu;
pub mod render;
mod session;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use coord::Square;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
#[cfg(feature = "std")]
pub use menu::{Menu, MenuChoice};
pub use render::{BoardRenderer, Lines, RENDERED_LINE_COUNT};
pub use session::*;
