//! Side-effecting services the controller depends on.
//!
//! ARCHITECTURE
//! ============
//! Each service talks to the outside world through a small trait
//! (`KeyValueStore`, `ShareTarget`) so the browser implementations can live
//! in the `client` crate and tests can substitute in-memory fakes.

pub mod share;
pub mod storage;
