//! Handlers behind `AdminMiddleware`. Every mutation runs in one transaction.

pub mod game_handler;
pub mod medal_handler;
pub mod news_handler;
pub mod sport_handler;
pub mod team_handler;
pub mod user_handler;
