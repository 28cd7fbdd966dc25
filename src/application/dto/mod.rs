/// Data Transfer Objects for application layer
///
/// DTOs carry requests and options between the CLI and the use cases,
/// keeping the domain layer free of presentation concerns.
mod bom_format;
mod bom_request;

pub use bom_format::BomFormat;
pub use bom_request::{BomRequest, SolutionRequest};
