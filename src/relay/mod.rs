//! Lambda relays: one per deployed function

pub mod classifying;
pub mod generic;

pub use classifying::ClassifyingRelay;
pub use generic::GenericRelay;
