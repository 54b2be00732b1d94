/// Use cases module containing application business logic orchestration
mod dispatch_outputs;
mod generate_sbom;

pub use dispatch_outputs::DispatchOutputsUseCase;
pub use generate_sbom::GenerateSbomUseCase;
