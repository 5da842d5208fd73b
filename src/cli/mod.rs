pub mod init_shell;
pub mod show;
