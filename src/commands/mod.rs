//! CLI commands

pub mod lang;
pub mod list;
pub mod new;
