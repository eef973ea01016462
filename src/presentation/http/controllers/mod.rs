// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod api;
pub mod guest;
