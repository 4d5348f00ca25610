//! Read-only endpoints open to anonymous visitors.

pub mod catalog_handler;
pub mod game_handler;
pub mod medal_handler;
