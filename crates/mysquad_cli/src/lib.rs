//! MySquad command line library
//!
//! Path resolution, text-table rendering and the command bodies behind the
//! `mysquad` binary.

pub mod commands;
pub mod config;
pub mod render;

pub use config::Paths;
pub use render::{render_records, TableRenderer, TextTable};
