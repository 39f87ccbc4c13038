//! Core types and definitions for the STARSHIP simulation.
//!
//! This crate defines the vocabulary shared by the simulation and its
//! drivers: vector helpers, input signals, snapshot views, events, and
//! constants. It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
