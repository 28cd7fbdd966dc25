/// Ports module defining the interfaces of the hexagonal architecture
///
/// Only outbound (driven) ports exist: the application core calls out to
/// scanners, formatters, the file system, the network and the console
/// through these traits.
pub mod outbound;
