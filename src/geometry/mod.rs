//! Hex-grid packing and fisheye geometry.
//!
//! Everything here is pure: the packer turns an item list into staggered
//! rows, and the field functions turn a grid position plus a scroll position
//! into a scale and translation. Callers own the state.

pub mod anchor;
pub mod field;
pub mod guides;
pub mod packer;
pub mod zone;

pub use anchor::anchor_offset;
pub use field::{interpolate, metrics_at, scale_for, size_and_offset, translation_magnitude};
pub use guides::{guides, GuideRect, Guides};
pub use packer::{pack, Row};
pub use zone::{classify, EdgeDistance, Zone};
