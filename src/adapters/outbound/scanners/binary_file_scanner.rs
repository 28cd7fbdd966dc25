use crate::adapters::outbound::filesystem::directory_walker::{find_files, has_extension};
use crate::ports::outbound::{ProjectScanner, ScanOutcome};
use crate::sbom_generation::domain::{Component, ComponentType};
use crate::shared::error::SbomError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

const BINARY_EXTENSIONS: &[&str] = &["so", "dll", "dylib", "exe", "jar"];

/// Fallback scanner recording shipped binaries by content hash
///
/// Applies to every project and is always consulted last.
#[derive(Debug, Default)]
pub struct BinaryFileScanner;

impl BinaryFileScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn is_binary_artifact(path: &Path) -> bool {
        has_extension(path, BINARY_EXTENSIONS)
    }

    /// Hex SHA-256 of the whole file, streamed
    pub fn sha256_file(path: &Path) -> Result<String> {
        let read_error = |e: io::Error| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        };
        let mut file = File::open(path).map_err(read_error)?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).map_err(read_error)?;
        Ok(hex::encode(hasher.finalize()))
    }

    /// Describes one file as a `file` component with its path relative to `root`
    pub fn component_for_file(root: &Path, path: &Path) -> Result<Component> {
        validate_not_symlink(path, "hash")?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let relative = path.strip_prefix(root).unwrap_or(path);

        let mut component = Component::new(file_name)?
            .with_version(Some("unknown".to_string()))
            .with_type(ComponentType::File)
            .with_description(format!("Binary file: {}", extension));
        component.file_path = Some(relative.to_string_lossy().into_owned());
        component.file_hash = Some(Self::sha256_file(path)?);
        Ok(component)
    }
}

impl ProjectScanner for BinaryFileScanner {
    fn name(&self) -> &'static str {
        "Binary files"
    }

    fn can_handle(&self, _root: &Path) -> bool {
        true
    }

    fn extract(&self, root: &Path) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        for path in find_files(root, false, Self::is_binary_artifact) {
            let parsed = Self::component_for_file(root, &path).map(|c| vec![c]);
            outcome.absorb(&path, parsed);
        }

        Ok(outcome)
    }
}
