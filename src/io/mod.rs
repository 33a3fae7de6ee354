//! Input/output helpers.
//!
//! - currency input parsing (`input`)
//! - schedule JSON read/write (`schedule`)
//! - fee estimate exports (`export`)

pub mod export;
pub mod input;
pub mod schedule;

pub use export::*;
pub use input::*;
pub use schedule::*;
