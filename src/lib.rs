//! hexbubble
//!
//! Layout engine for a pannable hexagonal field of bubbles that grow toward
//! the centre of the viewport and shrink toward its edges, plus a terminal
//! viewer that drives it.
//!
//! The engine is pure: [`geometry`] evaluates per-item scale and translation
//! from a [`model::LayoutConfig`], and [`state::BubbleField`] owns the packed
//! rows, scroll position and cached frames. [`view`] is the impure shell.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
