/// Factories selecting adapter implementations for the use cases
mod formatter_factory;
mod presenter_factory;
mod scanner_registry;

pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
pub use scanner_registry::{ScannerConstructor, ScannerRegistry};
