//! The `/info` payload and the counter that picks its shape.
//!
//! This module handles:
//! - Record types returned by `/info`
//! - The parity counter deciding which record is served next

pub mod counter;
pub mod types;

pub use counter::{CounterStep, InfoCounter};
pub use types::{BaseRecord, Element, ExtendedRecord, InfoRecord, Variant};
