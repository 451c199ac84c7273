// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;
pub mod unit_of_work;

pub use security::{
    ADMIN_TOKEN, DummyPasswordHasher, GHOST_TOKEN, StubTokenManager, USER_TOKEN,
};
pub use time::{FixedClock, SteppingClock, fixed_now};
pub use unit_of_work::FailingAuditUnitOfWorkFactory;
