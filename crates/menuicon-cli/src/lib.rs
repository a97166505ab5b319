//! Menuicon CLI library.
//!
//! This crate provides the commands behind the `menuicon` binary: table
//! loading, platform defaults and the generate/list/doctor commands.

pub mod commands;
pub mod defaults;
