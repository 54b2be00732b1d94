/// Crate-wide result alias.
///
/// Domain failures are `SbomError` values converted into `anyhow::Error`
/// at the point they are raised, so callers can add context with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
