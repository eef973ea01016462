// src/application/commands/auth/mod.rs
mod login;
mod logout;
mod service;
mod session;

pub use login::LoginCommand;
pub use logout::LogoutCommand;
pub use service::{AdminAuthService, AuthSettings};
