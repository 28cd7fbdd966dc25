/// Ecosystem scanners implementing the ProjectScanner port
mod binary_file_scanner;
mod dotnet_scanner;
mod java_scanner;
mod javascript_scanner;
mod python_scanner;
mod xml_namespace;

pub use binary_file_scanner::BinaryFileScanner;
pub use dotnet_scanner::{DotNetScanner, RuntimeInfo};
pub use java_scanner::JavaScanner;
pub use javascript_scanner::JavaScriptScanner;
pub use python_scanner::PythonScanner;
pub(crate) use xml_namespace::XmlScope;
