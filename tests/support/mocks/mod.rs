// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;

pub use security::{
    ADMIN_PASSWORD, ADMIN_PASSWORD_HASH, CountingSessionStore, PlainPasswordHasher,
};
pub use time::{FixedClock, SteppingClock, fixed_now};
