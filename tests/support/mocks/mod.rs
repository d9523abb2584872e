// tests/support/mocks/mod.rs
pub mod failing;
pub mod store;

pub use failing::FailingStore;
pub use store::InMemoryStore;
pub use time::FixedClock;
