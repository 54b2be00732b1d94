//! diggity-bom - BOM finalization and rendering for container scan results
//!
//! This library takes the raw package observations produced by a container
//! or filesystem scan, collapses them into one canonical inventory, and
//! renders that inventory as CycloneDX (XML or JSON), SPDX (JSON or
//! tag-value), or native JSON. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use diggity_bom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//! let response = use_case.execute(SbomRequest::new(PathBuf::from("scan.json")))?;
//!
//! let request = DispatchRequest::from_tokens("cyclonedx,spdx-json", Some(PathBuf::from("bom")));
//! DispatchOutputsUseCase::new(StderrProgressReporter::new()).execute(&response, &request)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CycloneDxJsonFormatter, CycloneDxXmlFormatter, JsonFormatter, SpdxJsonFormatter,
        SpdxTagValueFormatter,
    };
    pub use crate::application::dto::{DispatchRequest, OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::read_models::{SbomReadModel, SbomReadModelBuilder};
    pub use crate::application::use_cases::{DispatchOutputsUseCase, GenerateSbomUseCase};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, SbomFormatter, ScanReader, ScanReport,
    };
    pub use crate::sbom_generation::domain::{
        Component, ComponentType, Distro, Location, Package, SbomMetadata,
    };
    pub use crate::sbom_generation::services::{
        DistroAdapter, IdentifierSynthesis, ResultFinalizer, SbomGenerator,
    };
    pub use crate::shared::Result;
}
