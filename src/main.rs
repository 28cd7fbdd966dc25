mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod sbom_generation;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemBomReader, FileSystemSolutionDiscoverer};
use adapters::outbound::network::{CachingLicenseRepository, PyPiLicenseRepository};
use adapters::outbound::security::LocalSecurityAnalyzer;
use application::dto::{BomFormat, BomRequest, SolutionRequest};
use application::factories::{FormatterFactory, PresenterFactory, PresenterType, ScannerRegistry};
use application::use_cases::{
    export_bom_as, EnrichLicensesUseCase, GenerateBomUseCase, ScanSolutionUseCase,
};
use cli::{Args, Command, GenerateArgs, SolutionArgs, ValidateArgs};
use config::{resolve_config, ConfigFile};
use ports::outbound::{BomReader, ProgressReporter};
use sbom_generation::domain::BillOfMaterials;
use shared::error::{ExitCode, SbomError};
use shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

type ProjectUseCase = GenerateBomUseCase<StderrProgressReporter, LocalSecurityAnalyzer>;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level chosen here
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

async fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Generate(generate) => run_generate(generate).await,
        Command::Solution(solution) => run_solution(solution),
        Command::Validate(validate) => run_validate(validate),
    }
}

fn project_use_case() -> ProjectUseCase {
    GenerateBomUseCase::new(
        ScannerRegistry::new(),
        StderrProgressReporter::new(),
        LocalSecurityAnalyzer::new(),
    )
}

/// `--format` wins over the config file; SPDX otherwise
fn select_format(cli_format: Option<&str>, config: &ConfigFile) -> Result<BomFormat> {
    match cli_format {
        Some(name) => Ok(name.parse()?),
        None => Ok(config.bom_format()?.unwrap_or_default()),
    }
}

async fn run_generate(args: GenerateArgs) -> Result<ExitCode> {
    let config = resolve_config(args.config.as_deref(), &args.project_path)?;
    let format = select_format(args.format.as_deref(), &config)?;

    let request = BomRequest {
        project_path: args.project_path.clone(),
        target_system: args.target_system,
        target_version: args.target_version.or(config.target_version),
        manufacturer: args.manufacturer.or(config.manufacturer),
        device_model: args.device_model.or(config.device_model),
        fda_submission_id: args.fda_submission_id.or(config.fda_submission_id),
        include_vulnerabilities: !args.no_vulnerabilities
            && config.include_vulnerabilities.unwrap_or(true),
    };
    let update_licenses = args.update_licenses || config.update_licenses.unwrap_or(false);

    let use_case = project_use_case();
    let mut bom = use_case.generate_bom(&request)?;

    if update_licenses {
        let repository = CachingLicenseRepository::new(PyPiLicenseRepository::new()?);
        EnrichLicensesUseCase::new(repository)
            .execute(&mut bom, use_case.progress_reporter())
            .await;
    }

    let output_path = args.output.unwrap_or_else(|| {
        args.project_path
            .join(format!("{}.{}", bom.document_name(), format.file_extension()))
    });

    let reporter = use_case.progress_reporter();
    reporter.report(FormatterFactory::progress_message(format));
    export_bom_as(&bom, &output_path, format)?;

    report_compliance_summary(&use_case, &bom);
    reporter.report_completion(&format!(
        "✅ SBOM written to {} ({} components)",
        output_path.display(),
        bom.components.len()
    ));

    Ok(ExitCode::Success)
}

fn report_compliance_summary(use_case: &ProjectUseCase, bom: &BillOfMaterials) {
    let report = use_case.validate_bom(bom);
    let reporter = use_case.progress_reporter();
    if report.fda_compliant {
        reporter.report("✅ FDA compliance checks passed");
        return;
    }
    reporter.report_error(&format!(
        "FDA compliance: {} issue(s) found",
        report.compliance_issues.len()
    ));
    for issue in &report.compliance_issues {
        reporter.report(&format!("   - {}", issue));
    }
}

fn run_solution(args: SolutionArgs) -> Result<ExitCode> {
    let config = resolve_config(args.config.as_deref(), &args.solution_path)?;
    let format = select_format(args.format.as_deref(), &config)?;
    let writes_individual = args.writes_individual_sboms();

    let request = SolutionRequest {
        solution_path: args.solution_path.clone(),
        manufacturer: args.manufacturer.or(config.manufacturer),
        include_vulnerabilities: !args.no_vulnerabilities
            && config.include_vulnerabilities.unwrap_or(true),
    };

    let use_case =
        ScanSolutionUseCase::new(FileSystemSolutionDiscoverer::new(), project_use_case());
    let project_boms = use_case.scan_solution(&request)?;
    if project_boms.is_empty() {
        return Err(SbomError::EmptyInput {
            operation: "export".to_string(),
        }
        .into());
    }

    let output_dir = args
        .output
        .unwrap_or_else(|| args.solution_path.join("sboms"));
    create_output_dir(&output_dir)?;

    let solution_name = args
        .solution_name
        .unwrap_or_else(|| use_case.default_solution_name(&request));
    let reporter = use_case.generator().progress_reporter();

    if writes_individual {
        for (name, bom) in &project_boms {
            let path = output_dir.join(format!("{}.{}", name, format.file_extension()));
            export_bom_as(bom, &path, format)?;
            reporter.report(&format!("   📄 {}", path.display()));
        }
    }

    if args.solution_sbom {
        let solution_bom = use_case.build_solution_bom(
            &project_boms,
            &solution_name,
            request.manufacturer.as_deref(),
        )?;
        let solution_path =
            output_dir.join(format!("{}-solution.{}", solution_name, format.file_extension()));
        export_bom_as(&solution_bom, &solution_path, format)?;
        reporter.report(&format!("   📄 {}", solution_path.display()));

        let report = use_case.solution_report(&project_boms, &solution_bom);
        let report_path = output_dir.join(format!("{}-report.json", solution_name));
        PresenterFactory::create(PresenterType::File(report_path.clone()))
            .present(&serde_json::to_string_pretty(&report)?)?;
        reporter.report(&format!("   📊 {}", report_path.display()));
    }

    reporter.report_completion(&format!(
        "✅ Solution scan complete: {} project(s), output in {}",
        project_boms.len(),
        output_dir.display()
    ));
    Ok(ExitCode::Success)
}

fn create_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| SbomError::FileWriteError {
        path: dir.to_path_buf(),
        details: format!("Failed to create output directory: {}", e),
    })?;
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<ExitCode> {
    let bom = FileSystemBomReader::new().read_bom(&args.sbom_file)?;
    let use_case = project_use_case();

    let report = use_case.validate_bom(&bom);
    PresenterFactory::create(PresenterType::Stdout)
        .present(&serde_json::to_string_pretty(&report)?)?;

    let reporter = use_case.progress_reporter();
    reporter.report("FDA compliance checklist:");
    for (label, passed) in use_case.compliance_checklist(&bom).items() {
        let marker = if passed { "✅" } else { "❌" };
        reporter.report(&format!("   {} {}", marker, label));
    }

    if report.fda_compliant {
        reporter.report_completion("✅ SBOM is FDA compliant");
        Ok(ExitCode::Success)
    } else {
        reporter.report_error(&format!(
            "SBOM is not FDA compliant: {} issue(s)",
            report.compliance_issues.len()
        ));
        Ok(ExitCode::ComplianceFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_select_format_precedence() {
        let config = ConfigFile {
            format: Some("swid".to_string()),
            ..ConfigFile::default()
        };

        assert_eq!(select_format(Some("json"), &config).unwrap(), BomFormat::Json);
        assert_eq!(select_format(None, &config).unwrap(), BomFormat::Swid);
        assert_eq!(
            select_format(None, &ConfigFile::default()).unwrap(),
            BomFormat::Spdx
        );
    }

    #[test]
    fn test_select_format_unsupported() {
        let err = select_format(Some("pdf"), &ConfigFile::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_create_output_dir_nested() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let nested: PathBuf = temp_dir.path().join("a/b/sboms");
        create_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
