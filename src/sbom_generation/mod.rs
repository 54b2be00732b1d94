/// Domain layer - Pure business logic and domain models
///
/// Nothing in this layer performs I/O. Services operate on plain values
/// and are shared by every output format.
pub mod domain;
pub mod services;
