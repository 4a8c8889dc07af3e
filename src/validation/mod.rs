//! Input and result validation.

mod validate;

pub use validate::*;
