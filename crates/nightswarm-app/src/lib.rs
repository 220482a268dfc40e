//! Application layer for NIGHTSWARM.
//!
//! `GameDirector` is the progression state machine over screens; the
//! game loop runs it at a fixed rate on its own thread, with commands
//! and snapshots crossing over `mpsc` channels. A frontend (renderer +
//! input device) sits on the other end of those channels.

pub mod director;
pub mod game_loop;

pub use director::{DirectorConfig, GameDirector};
pub use game_loop::{spawn_game_loop, GameLoopCommand, GameLoopHandle};
