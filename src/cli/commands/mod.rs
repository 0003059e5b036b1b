pub mod achievements;
pub mod add;
pub mod breakdown;
pub mod compare;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
pub mod streak;
