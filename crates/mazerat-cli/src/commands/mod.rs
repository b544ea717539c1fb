//! CLI command implementations.

pub mod edit;
pub mod init;
pub mod play;
pub mod policies;
pub mod run;
pub mod show;
