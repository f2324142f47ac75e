pub mod battle;
pub mod cli;
pub mod data;
pub mod parallel;
pub mod search;
