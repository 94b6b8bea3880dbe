//! Camera Module
//!
//! The viewing camera and the orbit/look-target helper it pairs with.
//! Window-system agnostic: matrices come out as column-major arrays ready
//! for wgpu uniform upload, and all input arrives as plain pixel deltas.

pub mod orbit;
pub mod perspective;

pub use orbit::OrbitControls;
pub use perspective::PerspectiveCamera;
