/// Page identity type
///
/// Opaque to the policies: only equality is ever consulted, and negative
/// ids are as valid as any other.
pub type PageId = i64;

/// Index of a physical frame slot
pub type FrameIndex = usize;
