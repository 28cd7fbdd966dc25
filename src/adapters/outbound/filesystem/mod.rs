/// Filesystem adapters: directory walking, BOM reading, output writing and
/// solution discovery
mod bom_reader;
pub mod directory_walker;
mod file_writer;
mod solution_discoverer;

pub use bom_reader::FileSystemBomReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use solution_discoverer::FileSystemSolutionDiscoverer;
