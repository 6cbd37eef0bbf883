//! Command handlers for the courtside CLI

pub mod common;
pub mod injuries;
pub mod players;
pub mod schedule;
pub mod teams;

pub use common::open_database;
