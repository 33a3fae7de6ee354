//! `advisory-fees` library crate.
//!
//! The binary (`feecalc`) is a thin wrapper around this library so that:
//!
//! - the fee engine is testable without spawning processes
//! - the engine stays reusable by other front-ends (web, PDF renderers, etc.)
//! - collaborators (access check, exports) stay out of the engine

pub mod access;
pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod schedule;
