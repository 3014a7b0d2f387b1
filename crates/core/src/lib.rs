//! Appraisal cycle phase timelines.
//!
//! Pure, synchronous domain logic shared by the API layer and any future
//! tooling: the phase data model, phase type metadata, date calculation,
//! timeline validation, ordering helpers and cycle presets. Nothing in this
//! crate performs I/O.

pub mod calculator;
pub mod error;
pub mod phase;
pub mod phase_type;
pub mod preset;
pub mod reorder;
pub mod span;
pub mod suggested_order;
pub mod timeline_validation;
pub mod types;
