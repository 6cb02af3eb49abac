//! Browser adapters for the domain services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module implements one `quoteday` seam against web-sys so pages and
//! components never touch browser APIs directly. Without the `csr` feature
//! every adapter reports itself unavailable.

pub mod dark_mode;
pub mod local_storage;
pub mod share;
