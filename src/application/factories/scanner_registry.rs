use crate::adapters::outbound::scanners::{
    BinaryFileScanner, DotNetScanner, JavaScanner, JavaScriptScanner, PythonScanner,
};
use crate::ports::outbound::ProjectScanner;
use std::path::Path;

/// Builds one scanner instance
pub type ScannerConstructor = fn() -> Box<dyn ProjectScanner>;

fn python() -> Box<dyn ProjectScanner> {
    Box::new(PythonScanner::new())
}

fn javascript() -> Box<dyn ProjectScanner> {
    Box::new(JavaScriptScanner::new())
}

fn java() -> Box<dyn ProjectScanner> {
    Box::new(JavaScanner::new())
}

fn dotnet() -> Box<dyn ProjectScanner> {
    Box::new(DotNetScanner::new())
}

fn binary_files() -> Box<dyn ProjectScanner> {
    Box::new(BinaryFileScanner::new())
}

/// Ordered set of scanner constructors with the fallback pinned last
///
/// A registry is an ordinary value built once per run and handed to the
/// use cases; nothing is registered globally. Fresh scanner instances are
/// created for every [`ScannerRegistry::applicable`] call.
pub struct ScannerRegistry {
    ecosystem_scanners: Vec<ScannerConstructor>,
    fallback: ScannerConstructor,
}

impl ScannerRegistry {
    /// Python, JavaScript, Java and .NET, then the binary-file fallback
    pub fn new() -> Self {
        Self {
            ecosystem_scanners: vec![python, javascript, java, dotnet],
            fallback: binary_files,
        }
    }

    /// Registers another scanner; it runs after the existing ecosystem
    /// scanners and before the fallback
    ///
    /// A scanner whose name is already registered is ignored.
    pub fn register_scanner(&mut self, constructor: ScannerConstructor) {
        let name = constructor().name();
        if self.scanner_names().contains(&name) {
            tracing::debug!(scanner = name, "scanner already registered");
            return;
        }
        self.ecosystem_scanners.push(constructor);
    }

    fn constructors(&self) -> impl Iterator<Item = &ScannerConstructor> {
        self.ecosystem_scanners
            .iter()
            .chain(std::iter::once(&self.fallback))
    }

    /// Scanners whose `can_handle` accepts `root`, in registration order
    pub fn applicable(&self, root: &Path) -> Vec<Box<dyn ProjectScanner>> {
        self.constructors()
            .map(|construct| construct())
            .filter(|scanner| scanner.can_handle(root))
            .collect()
    }

    pub fn scanner_names(&self) -> Vec<&'static str> {
        self.constructors().map(|construct| construct().name()).collect()
    }
}

impl Default for ScannerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ScanOutcome;
    use crate::shared::Result;
    use std::fs;
    use tempfile::TempDir;

    struct CargoScanner;

    impl ProjectScanner for CargoScanner {
        fn name(&self) -> &'static str {
            "Cargo"
        }

        fn can_handle(&self, root: &Path) -> bool {
            root.join("Cargo.toml").exists()
        }

        fn extract(&self, _root: &Path) -> Result<ScanOutcome> {
            Ok(ScanOutcome::default())
        }
    }

    fn cargo() -> Box<dyn ProjectScanner> {
        Box::new(CargoScanner)
    }

    fn names(scanners: &[Box<dyn ProjectScanner>]) -> Vec<&'static str> {
        scanners.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn test_default_order() {
        assert_eq!(
            ScannerRegistry::new().scanner_names(),
            vec!["Python", "JavaScript", "Java", ".NET", "Binary files"]
        );
    }

    #[test]
    fn test_package_json_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("package.json"), "{}").unwrap();

        let scanners = ScannerRegistry::new().applicable(temp_dir.path());
        assert_eq!(names(&scanners), vec!["JavaScript", "Binary files"]);
    }

    #[test]
    fn test_empty_directory_gets_fallback_only() {
        let temp_dir = TempDir::new().unwrap();
        let scanners = ScannerRegistry::new().applicable(temp_dir.path());
        assert_eq!(names(&scanners), vec!["Binary files"]);
    }

    #[test]
    fn test_registered_scanner_precedes_fallback() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Cargo.toml"), "").unwrap();
        fs::write(temp_dir.path().join("requirements.txt"), "").unwrap();

        let mut registry = ScannerRegistry::new();
        registry.register_scanner(cargo);

        assert_eq!(
            registry.scanner_names().last().copied(),
            Some("Binary files")
        );
        let scanners = registry.applicable(temp_dir.path());
        assert_eq!(names(&scanners), vec!["Python", "Cargo", "Binary files"]);
    }

    #[test]
    fn test_register_scanner_ignores_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("requirements.txt"), "flask\n").unwrap();

        let mut registry = ScannerRegistry::new();
        registry.register_scanner(python);
        registry.register_scanner(binary_files);
        registry.register_scanner(cargo);
        registry.register_scanner(cargo);

        assert_eq!(
            registry.scanner_names(),
            vec!["Python", "JavaScript", "Java", ".NET", "Cargo", "Binary files"]
        );
        let scanners = registry.applicable(temp_dir.path());
        assert_eq!(names(&scanners), vec!["Python", "Binary files"]);
    }
}
