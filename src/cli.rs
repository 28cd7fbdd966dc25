use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Generate FDA-ready software bills of materials for multi-ecosystem projects
#[derive(Parser, Debug)]
#[command(name = "fda-sbom")]
#[command(version)]
#[command(
    about = "Generate SPDX, CycloneDX, SWID and JSON SBOMs for Python, JavaScript, Java and .NET projects",
    long_about = None
)]
pub struct Args {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an SBOM for a single project
    Generate(GenerateArgs),
    /// Generate SBOMs for every project in a multi-project solution
    Solution(SolutionArgs),
    /// Check a native-JSON SBOM for FDA compliance
    Validate(ValidateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Project directory to scan
    pub project_path: PathBuf,

    /// Output file (defaults to <project>/<name>.<format extension>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: spdx, cyclonedx, swid or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Target system name (defaults to the directory name)
    #[arg(long)]
    pub target_system: Option<String>,

    /// Target system version
    #[arg(long)]
    pub target_version: Option<String>,

    /// Device manufacturer
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Device model number
    #[arg(long)]
    pub device_model: Option<String>,

    /// FDA submission identifier
    #[arg(long)]
    pub fda_submission_id: Option<String>,

    /// Skip vulnerability scanning
    #[arg(long)]
    pub no_vulnerabilities: bool,

    /// Look up missing licenses of pip packages on PyPI
    #[arg(long)]
    pub update_licenses: bool,

    /// Configuration file (defaults to <project>/fda-sbom.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct SolutionArgs {
    /// Solution (workspace) directory
    pub solution_path: PathBuf,

    /// Output directory (defaults to <solution>/sboms)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: spdx, cyclonedx, swid or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Solution name (defaults to the directory name)
    #[arg(long)]
    pub solution_name: Option<String>,

    /// Device manufacturer
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Skip vulnerability scanning
    #[arg(long)]
    pub no_vulnerabilities: bool,

    /// Write one SBOM per project
    #[arg(long)]
    pub individual_sboms: bool,

    /// Write the consolidated solution SBOM and report
    #[arg(long)]
    pub solution_sbom: bool,

    /// Configuration file (defaults to <solution>/fda-sbom.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SolutionArgs {
    /// Per-project SBOMs are written unless only `--solution-sbom` was given
    pub fn writes_individual_sboms(&self) -> bool {
        self.individual_sboms || !self.solution_sbom
    }
}

#[derive(ClapArgs, Debug)]
pub struct ValidateArgs {
    /// SBOM file in native JSON format
    pub sbom_file: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
