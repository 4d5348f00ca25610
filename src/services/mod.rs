pub mod account_service;
pub mod catalog_service;
pub mod game_service;
pub mod medal_service;
