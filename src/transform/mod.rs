//! Roll pricing and material usage transformations.

mod material;
mod panel;
mod totals;

pub use material::*;
pub use panel::*;
pub use totals::*;
