//! Entity store queries. Every function takes an executor so callers can run
//! it against the pool for reads or inside an open transaction for writes.

pub mod game_queries;
pub mod medal_queries;
pub mod news;
pub mod sports;
pub mod teams;
pub mod users;
