//! Game rules for dots and boxes.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! storage so the engine and the invariant checks share one definition.

pub mod completion;
pub mod outcome;

pub use completion::{adjacent_boxes, completed_by};
pub use outcome::{decide, is_full};
