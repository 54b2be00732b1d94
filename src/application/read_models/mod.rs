//! Read models for CQRS-lite pattern
//!
//! The canonical package list is finalized once and then projected into a
//! view shared read-only by every renderer.

mod sbom_read_model;
mod sbom_read_model_builder;

pub use sbom_read_model::SbomReadModel;
pub use sbom_read_model_builder::SbomReadModelBuilder;
