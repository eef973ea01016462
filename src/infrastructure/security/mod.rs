// src/infrastructure/security/mod.rs
pub mod csrf;
pub mod password;
pub mod session_store;
