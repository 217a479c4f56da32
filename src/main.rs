use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use napi_build_utils::config::{self, NAPI_VERSION_ENV, NODE_VERSION_ENV};
use napi_build_utils::logging::init_logging;
use napi_build_utils::parser::{ManifestParser, PackageJsonParser, PackageManifest};
use napi_build_utils::version::prebuild::load_prebuilds;
use napi_build_utils::version::{RuntimeDescriptor, TracingLogSink, VersionResolver};

#[derive(Parser)]
#[command(name = "napi-build-utils")]
#[command(version, about = "Pick and check N-API versions for native addon builds")]
struct Cli {
    /// Path to package.json (defaults to ./package.json)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Host runtime version, e.g. v18.17.0
    #[arg(long, global = true, env = NODE_VERSION_ENV)]
    node_version: Option<String>,

    /// N-API version reported directly by the host runtime
    #[arg(long, global = true, env = NAPI_VERSION_ENV)]
    napi_version: Option<u32>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the highest N-API version the runtime supports
    Runtime,
    /// Print the N-API versions declared by the package
    Versions,
    /// Print the best N-API version to build
    Best,
    /// Warn about versions the runtime or the package does not support
    Check {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Warn about versions that have no prebuild
    Missing {
        #[arg(required = true)]
        versions: Vec<String>,
        /// JSON list of { "runtime", "target" } prebuild records
        #[arg(long)]
        prebuilds: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    let runtime = runtime_descriptor(&cli)?;

    match cli.command {
        Command::Runtime => print_optional(runtime.napi_version()),
        command => {
            let manifest = load_manifest(cli.manifest.as_deref())?;
            run_manifest_command(command, &VersionResolver::new(&runtime, &manifest))?;
        }
    }

    Ok(())
}

fn run_manifest_command(command: Command, resolver: &VersionResolver) -> anyhow::Result<()> {
    let sink = TracingLogSink;

    match command {
        Command::Runtime => print_optional(resolver.napi_version()),
        Command::Versions => {
            for version in resolver.build_versions().unwrap_or_default() {
                println!("{version}");
            }
        }
        Command::Best => print_optional(resolver.best_build_version()),
        Command::Check { versions } => {
            for version in &versions {
                resolver.log_unsupported_version(version, &sink);
            }
        }
        Command::Missing {
            versions,
            prebuilds,
        } => {
            let prebuilds = load_prebuilds(&prebuilds)?;
            resolver.log_missing_napi_versions(&versions, &prebuilds, &sink);
        }
    }

    Ok(())
}

/// Only commands that read declared versions need the manifest
fn load_manifest(explicit: Option<&Path>) -> anyhow::Result<PackageManifest> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let manifest_path = config::manifest_path(explicit, &cwd);
    PackageJsonParser::new()
        .parse_file(&manifest_path)
        .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))
}

/// Without an explicit runtime version only a directly reported N-API version is known
fn runtime_descriptor(cli: &Cli) -> anyhow::Result<RuntimeDescriptor> {
    match cli.node_version.as_deref() {
        Some(version) => Ok(RuntimeDescriptor::parse(version, cli.napi_version)?),
        None => Ok(RuntimeDescriptor::new(
            semver::Version::new(0, 0, 0),
            cli.napi_version,
        )),
    }
}

fn print_optional(version: Option<u32>) {
    match version {
        Some(version) => println!("{version}"),
        None => println!("none"),
    }
}
