#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::perf, clippy::suspicious)] // Catch correctness + perf + suspicious patterns early.
#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Display-name resolution for component-inspection tooling.
//!
//! Inspection tooling registers a descriptor for each component type it
//! encounters and receives a stable handle back. The registry resolves a
//! human-readable display name once per handle, caches the result, and strips
//! redundant `[from <module>]` suffixes so the tooling shows `Image` rather
//! than `Image [from Image.react]`. Raw names can still be captured for error
//! reports via the optional resolution report.

pub mod cleanup;
pub mod component;
pub mod registry;
pub mod report;

pub use cleanup::cleaned_display_name;
pub use component::{ComponentId, ComponentType, DisplayName, NameProducer, ProducerError};
pub use registry::{
    ComponentRegistry, UNKNOWN_NAME, component_count, display_name, register_component,
    release_component,
};
pub use report::{NameOrigin, NameRecord, NameReport, ReportError};
