mod distro_adapter;
mod identifier_synthesis;
mod result_finalizer;
mod sbom_generator;
pub mod spdx_mapping;

pub use distro_adapter::DistroAdapter;
pub use identifier_synthesis::IdentifierSynthesis;
pub use result_finalizer::ResultFinalizer;
pub use sbom_generator::SbomGenerator;
