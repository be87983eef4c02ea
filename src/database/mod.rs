//! This module acts as a central hub for all database-related logic.
//! It declares the specialized submodules so they can be accessed from
//! elsewhere in the application via their full path, e.g., `database::players::get_player`.

pub mod init;
pub mod models;
pub mod players;
