pub mod component;
pub mod distro;
pub mod package;
pub mod sbom_metadata;

pub use component::{Component, ComponentType, ExternalReference, License, Property};
pub use distro::Distro;
pub use package::{Location, Package};
pub use sbom_metadata::SbomMetadata;
