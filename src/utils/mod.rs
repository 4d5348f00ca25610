pub mod ids;
pub mod password;
pub mod timestamp;
