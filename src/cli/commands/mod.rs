pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod milestone;
pub mod restore;
pub mod set;
pub mod show;
