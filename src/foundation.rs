/// Error taxonomy and result alias.
pub mod error;
/// Packing geometry primitives.
pub mod geom;
