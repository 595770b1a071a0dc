pub mod clock;
pub mod config;
pub mod init;
pub mod locate;
pub mod login;
pub mod status;
