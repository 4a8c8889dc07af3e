//! Cached user preferences.

mod store;

pub use store::*;
