//! Game implementations.

pub mod dots_and_boxes;
