//! Data model types for material quoting.

mod piece;
mod roll;
mod usage;

pub use piece::{CutPiece, PieceRow};
pub use roll::{find_roll, MaterialSource, Roll, RollLength, RollSize, TAPE_ROLLS, VINYL_ROLLS};
pub use usage::{Orientation, PanelizationResult, QuoteLineItem};
