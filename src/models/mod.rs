pub mod auth;
pub mod common;
pub mod game;
pub mod medal;
pub mod news;
pub mod sport;
pub mod team;
pub mod user;
