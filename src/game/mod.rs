pub mod lifecycle;

pub use lifecycle::{derive_winner, GamePatch, NewGame, Outcome};
