pub mod ranking;

pub use ranking::{rank_standings, MedalCounts};
