// src/presentation/http/middleware/mod.rs
pub mod rate_limit;
pub mod session;
