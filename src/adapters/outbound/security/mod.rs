/// Security analyzer adapters
mod local_security_analyzer;

pub use local_security_analyzer::LocalSecurityAnalyzer;
