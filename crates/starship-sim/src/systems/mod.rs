//! Systems that operate on the simulation state each frame.
//!
//! Systems are free functions over the pieces of state they touch.
//! They do not own state; `Game` does.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
