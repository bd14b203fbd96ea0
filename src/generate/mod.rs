//! Payload generation: field producers, uniqueness tracking, template
//! projection, and batch orchestration.

pub mod batch;
pub mod fields;
pub mod names;
pub mod registry;
pub mod template;

pub use batch::{generate_batch, BatchOptions, BatchReport, FieldSummary, Record};
pub use registry::{FieldKind, UniquenessRegistry};
pub use template::Template;
