pub mod app_shell;
pub mod preview;
pub mod thumbnail;
