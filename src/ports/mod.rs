/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the traits the application core uses to reach the
/// scan report, the renderers, the output destination and the console.
pub mod outbound;
