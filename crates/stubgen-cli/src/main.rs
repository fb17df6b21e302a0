//! stubgen - replace class method bodies with rule-driven stubs.
//!
//! Reads classes from folders or archives, applies the rule document and
//! writes the stubbed classes to a folder or archive.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use stubgen_core::errors::{ConfigError, TransformError};
use stubgen_core::tracing::init_tracing;
use stubgen_core::{ReturnStrategy, StubgenConfig, StubgenErrorCode, TransformConfig};
use stubgen_engine::rules::generate_json_schema;
use stubgen_engine::TransformReport;

/// Exit code for a failed transformation.
const EXIT_FAILURE: u8 = 1;
/// Exit code for usage and configuration errors.
const EXIT_USAGE: u8 = 2;

/// stubgen - rule-driven class stub generator
#[derive(Parser, Debug)]
#[command(name = "stubgen")]
#[command(about = "Replace class method bodies with stubs according to a rule document")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Source path. Might be a folder on a file system or an archive
    #[arg(short, long = "source", value_name = "path|jar")]
    sources: Vec<PathBuf>,

    /// Output folder, or archive when the path ends in .jar or .zip
    #[arg(short, long, value_name = "path|jar")]
    output: Option<PathBuf>,

    /// Rule document (toml, xml, json or yaml). Built-in rules are used when absent
    #[arg(short, long, value_name = "file")]
    rules: Option<PathBuf>,

    /// Additional search path used to resolve referenced classes
    #[arg(short, long = "classpath", value_name = "path|jar")]
    classpath: Vec<PathBuf>,

    /// Only stub public members; non-public classes and members are dropped
    #[arg(short = 'n', long, action = ArgAction::SetTrue)]
    strip_non_public: bool,

    /// Remove field definitions from classes
    #[arg(short = 'm', long, action = ArgAction::SetTrue)]
    strip_fields: bool,

    /// Remove the final modifier from classes and methods
    #[arg(short = 'f', long, action = ArgAction::SetTrue)]
    strip_final: bool,

    /// Return new instances instead of null for reference return types
    #[arg(short = 'g', long, action = ArgAction::SetTrue)]
    generate_instances: bool,

    /// Ignore duplicate matchers, use the first defined
    #[arg(short = 'i', long, action = ArgAction::SetTrue)]
    ignore_duplicate_matchers: bool,

    /// Target platform release for the written classes (1..=21)
    #[arg(short, long, value_name = "release")]
    target: Option<u8>,

    /// More output; repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Configuration file with a [transform] table
    #[arg(long, value_name = "file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the JSON Schema of the rule document
    Schema,
}

impl Cli {
    /// Options given on the command line. Unset flags stay `None` so that the
    /// config file can provide them.
    fn overrides(&self) -> TransformConfig {
        TransformConfig {
            sources: self.sources.clone(),
            output: self.output.clone(),
            rules: self.rules.clone(),
            classpath: self.classpath.clone(),
            strip_non_public: self.strip_non_public.then_some(true),
            strip_fields: self.strip_fields.then_some(true),
            strip_final: self.strip_final.then_some(true),
            ignore_duplicate_matchers: self.ignore_duplicate_matchers.then_some(true),
            return_strategy: self.generate_instances.then_some(ReturnStrategy::Instance),
            target: self.target,
            verbosity: (self.verbose > 0).then_some(self.verbose.min(2)),
        }
    }

    /// defaults <- config file <- command line
    fn resolve_config(&self) -> Result<TransformConfig> {
        let base = match &self.config {
            Some(path) => {
                StubgenConfig::load(path)
                    .with_context(|| format!("loading configuration from {}", path.display()))?
                    .transform
            }
            None => TransformConfig::default(),
        };
        Ok(base.merge(self.overrides()))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(Commands::Schema) = cli.command {
        return match print_schema() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err:#}");
                ExitCode::from(EXIT_FAILURE)
            }
        };
    }

    match execute(&cli) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error[{}]: {err:#}", error_code_of(&err));
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn execute(cli: &Cli) -> Result<TransformReport> {
    let config = cli.resolve_config()?;
    init_tracing(config.effective_verbosity().min(2));
    tracing::debug!(?config, "resolved configuration");

    let report = stubgen_engine::transform::run(&config).context("transformation failed")?;
    Ok(report)
}

fn print_schema() -> Result<()> {
    let schema = serde_json::to_string_pretty(&generate_json_schema())?;
    println!("{schema}");
    Ok(())
}

fn print_report(report: &TransformReport) {
    println!(
        "{} classes written ({} transformed, {} copied), {} stripped, {} dropped, {} injected",
        report.classes_written(),
        report.classes_transformed,
        report.classes_copied,
        report.classes_stripped,
        report.classes_dropped_frozen + report.classes_dropped_non_public,
        report.classes_injected,
    );
    if report.injection_failures > 0 || report.constructors_failed > 0 {
        println!(
            "{} injection failures, {} constructors left unchanged",
            report.injection_failures, report.constructors_failed
        );
    }
}

/// Configuration and rule errors are usage errors; everything else is a
/// failed transformation.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return EXIT_USAGE;
    }
    match err.downcast_ref::<TransformError>() {
        Some(TransformError::Config(_) | TransformError::Rules(_)) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

fn error_code_of(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<TransformError>() {
        e.error_code()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.error_code()
    } else {
        "INTERNAL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["stubgen"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn short_flags_map_to_config() {
        let cli = parse(&["-s", "in.jar", "-s", "more", "-o", "out", "-n", "-m", "-f", "-g", "-i", "-t", "8", "-vv"]);
        let config = cli.overrides();
        assert_eq!(config.sources, vec![PathBuf::from("in.jar"), PathBuf::from("more")]);
        assert_eq!(config.output, Some(PathBuf::from("out")));
        assert!(config.effective_strip_non_public());
        assert!(config.effective_strip_fields());
        assert!(config.effective_strip_final());
        assert!(config.effective_ignore_duplicate_matchers());
        assert_eq!(config.effective_return_strategy(), ReturnStrategy::Instance);
        assert_eq!(config.target, Some(8));
        assert_eq!(config.effective_verbosity(), 2);
    }

    #[test]
    fn long_flags_parse() {
        let cli = parse(&[
            "--source",
            "src",
            "--output",
            "out.jar",
            "--rules",
            "rules.xml",
            "--classpath",
            "lib.jar",
            "--strip-non-public",
            "--strip-fields",
            "--strip-final",
            "--generate-instances",
            "--ignore-duplicate-matchers",
            "--target",
            "11",
            "--verbose",
        ]);
        let config = cli.overrides();
        assert_eq!(config.rules, Some(PathBuf::from("rules.xml")));
        assert_eq!(config.classpath, vec![PathBuf::from("lib.jar")]);
        assert_eq!(config.target, Some(11));
        assert_eq!(config.effective_verbosity(), 1);
    }

    #[test]
    fn unset_flags_stay_unset() {
        let config = parse(&["-s", "src", "-o", "out"]).overrides();
        assert_eq!(config.strip_non_public, None);
        assert_eq!(config.return_strategy, None);
        assert_eq!(config.verbosity, None);
    }

    #[test]
    fn excess_verbosity_is_clamped() {
        let config = parse(&["-s", "src", "-o", "out", "-vvvv"]).overrides();
        assert_eq!(config.verbosity, Some(2));
    }

    #[test]
    fn schema_subcommand_parses() {
        let cli = parse(&["schema"]);
        assert!(matches!(cli.command, Some(Commands::Schema)));
    }

    #[test]
    fn command_line_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stubgen.toml");
        std::fs::write(
            &path,
            "[transform]\nsources = [\"from-file\"]\noutput = \"file-out\"\nstrip_fields = true\ntarget = 8\n",
        )
        .unwrap();

        let config_arg = path.to_string_lossy().into_owned();
        let config = parse(&["--config", &config_arg, "-o", "cli-out", "-t", "17"])
            .resolve_config()
            .unwrap();

        assert_eq!(config.sources, vec![PathBuf::from("from-file")]);
        assert_eq!(config.output, Some(PathBuf::from("cli-out")));
        assert!(config.effective_strip_fields());
        assert_eq!(config.target, Some(17));
    }

    #[test]
    fn missing_config_file_is_a_usage_error() {
        let err = parse(&["--config", "/nonexistent/stubgen.toml"])
            .resolve_config()
            .unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_USAGE);
        assert_eq!(error_code_of(&err), "CONFIG_ERROR");
    }

    #[test]
    fn configuration_errors_exit_with_usage_code() {
        let err = execute(&parse(&["-o", "out"])).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_USAGE);

        let err = execute(&parse(&["-s", "src", "-o", "out", "-t", "99"])).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_USAGE);
    }

    #[test]
    fn missing_source_is_a_transformation_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing");
        let output = dir.path().join("out");
        let source_arg = source.to_string_lossy().into_owned();
        let output_arg = output.to_string_lossy().into_owned();

        let err = execute(&parse(&["-s", &source_arg, "-o", &output_arg])).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_FAILURE);
    }

    #[test]
    fn empty_source_folder_writes_support_class() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("classes");
        std::fs::create_dir(&source).unwrap();
        let output = dir.path().join("out");
        let source_arg = source.to_string_lossy().into_owned();
        let output_arg = output.to_string_lossy().into_owned();

        let report = execute(&parse(&["-s", &source_arg, "-o", &output_arg])).unwrap();
        assert_eq!(report.classes_listed, 0);
        assert!(report.support_class_written);
        assert!(output.join("stubgen/runtime/Desc.class").is_file());
    }
}
