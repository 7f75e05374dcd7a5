//! Mousetrap CLI - terminal front end for the Mousetrap engine
//!
//! - `play`: play a new or saved game
//! - `saves`: list, show and delete saved games

pub mod play_cmd;
pub mod render;
pub mod saves;
pub mod saves_cmd;
pub mod session;
