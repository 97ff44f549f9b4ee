/// Bounded flood selection around a centre tile
pub mod flood;
/// Selection capability shared by tiles and tokens
pub mod selectable;
/// Per-item and whole-board selection operations
pub mod selection;
