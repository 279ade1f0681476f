pub mod ranks;
pub mod scores;
