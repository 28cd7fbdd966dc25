/// Formatter adapters for the supported export schemas
mod cyclonedx_formatter;
mod json_formatter;
mod spdx_formatter;
mod swid_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
pub use json_formatter::JsonFormatter;
pub use spdx_formatter::SpdxFormatter;
pub use swid_formatter::SwidFormatter;
