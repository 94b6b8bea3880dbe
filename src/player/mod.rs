//! Player Module
//!
//! The controllable subject's proxy state.

pub mod anchor;

pub use anchor::PlayerAnchor;
