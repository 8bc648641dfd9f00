//! Dial module - radial geometry and per-segment derivations
//!
//! Everything here is pure: angle math, needle snapping, and the
//! completion status derivation. The same nearest-neighbor-on-a-circle
//! matching serves both the 6-way cube orientation snap and the N-way
//! segment/needle snap.

mod layout;
mod needle;
mod status;

pub use layout::*;
pub use needle::*;
pub use status::*;
