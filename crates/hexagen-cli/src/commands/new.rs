//! Implementation of the `hexagen new` command.
//!
//! Responsibility: translate CLI arguments into `SolutionParams`, drive the
//! core pipeline with the right adapters, and display results. No business
//! logic lives here.

use serde::Serialize;
use tracing::{debug, info, instrument};

use hexagen_adapters::{
    BuiltinCatalogue, DotnetToolchain, LocalFilesystem, MemoryFilesystem, RecordingToolchain,
};
use hexagen_core::{
    application::SolutionDriver,
    domain::{BuildUnitKind, Layer, Solution, SolutionContext, SolutionParams, ToolchainCommand},
};

use crate::{
    cli::{GlobalArgs, NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::ConsoleProgress,
};

const NAME_REQUIRED: &str = "The solution name is required. See --help for available commands";
const DIRECTORY_REQUIRED: &str =
    "The working directory is required. See --help for available commands";

/// Execute the `hexagen new` command.
///
/// Dispatch sequence:
/// 1. Check that `--name` and `--directory` were given
/// 2. Validate the parameters (nothing is touched on failure)
/// 3. `--dry-run`: run against in-memory adapters and report
/// 4. Confirm with the user unless `--yes`, `--quiet` or non-interactive
/// 5. Generate with the local filesystem and the real toolchain
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(name = ?args.name, directory = ?args.directory))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let params = build_params(&args, &config)?;
    let ctx = SolutionContext::from_params(&params).map_err(|e| CliError::Core(e.into()))?;
    debug!(
        root = %ctx.root().display(),
        framework = %ctx.framework(),
        "Parameters resolved"
    );

    if args.dry_run {
        return dry_run(&params, &config, &output);
    }

    if !global.quiet && !args.yes && output.format() == OutputFormat::Human {
        show_configuration(&ctx, &config, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    generate(&params, &config, &output)
}

// ── Parameters ────────────────────────────────────────────────────────────────

fn build_params(args: &NewArgs, config: &AppConfig) -> CliResult<SolutionParams> {
    let name = required(args.name.as_deref(), "--name", NAME_REQUIRED)?;
    let directory = required(args.directory.as_deref(), "--directory", DIRECTORY_REQUIRED)?;
    let framework = args
        .framework
        .clone()
        .unwrap_or_else(|| config.defaults.framework.clone());

    Ok(SolutionParams::new(name, directory).with_framework(framework))
}

fn required<'a>(
    value: Option<&'a str>,
    flag: &'static str,
    message: &'static str,
) -> CliResult<&'a str> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(CliError::MissingArgument { flag, message })
}

// ── Generation ────────────────────────────────────────────────────────────────

fn generate(params: &SolutionParams, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let progress = ConsoleProgress::for_output(output);
    let toolchain = DotnetToolchain::with_program(config.toolchain.program.clone()).quiet(
        progress.owns_terminal() || output.is_quiet() || output.format() == OutputFormat::Json,
    );

    let mut driver = SolutionDriver::new(
        Box::new(LocalFilesystem::new()),
        Box::new(toolchain),
        Box::new(BuiltinCatalogue::new()),
    )
    .with_progress(progress.sink());

    info!(program = %config.toolchain.program, "Generation started");
    let result = driver.run(params);
    progress.clear();

    let solution = result.map_err(|e| {
        debug!(state = %driver.state(), "Generation stopped");
        CliError::Core(e)
    })?;
    info!(projects = solution.len(), "Generation completed");

    if output.format() == OutputFormat::Json {
        output.json(&SolutionSummary::from(&solution))?;
        return Ok(());
    }

    let ctx = solution.context();
    output.success(&format!(
        "Solution '{}' generated in {}",
        ctx.name(),
        ctx.root().display()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", ctx.root().display()))?;
    output.print(&format!(
        "  {} build {}",
        config.toolchain.program,
        ctx.solution_file_name()
    ))?;
    Ok(())
}

/// Run the whole pipeline against in-memory adapters and report what a real
/// run would do.
fn dry_run(params: &SolutionParams, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let filesystem = MemoryFilesystem::new();
    let toolchain = RecordingToolchain::new();

    let solution = SolutionDriver::new(
        Box::new(filesystem.clone()),
        Box::new(toolchain.clone()),
        Box::new(BuiltinCatalogue::new()),
    )
    .run(params)?;

    let commands: Vec<String> = toolchain
        .commands()
        .iter()
        .map(|command| command_line(&config.toolchain.program, command))
        .collect();
    let files: Vec<String> = filesystem
        .list_files()
        .iter()
        .map(|path| path.display().to_string())
        .collect();

    if output.format() == OutputFormat::Json {
        output.json(&DryRunReport {
            solution: SolutionSummary::from(&solution),
            commands,
            files,
        })?;
        return Ok(());
    }

    let ctx = solution.context();
    output.header(&format!(
        "Dry run: would generate '{}' in {}",
        ctx.name(),
        ctx.root().display()
    ))?;
    output.print("")?;
    output.print(&format!("Toolchain commands ({}):", commands.len()))?;
    for command in &commands {
        output.print(&format!("  {command}"))?;
    }
    output.print("")?;
    output.print(&format!("Files ({}):", files.len()))?;
    for file in &files {
        output.print(&format!("  {file}"))?;
    }
    output.print("")?;
    output.info("Nothing was written.")?;
    Ok(())
}

fn command_line(program: &str, command: &ToolchainCommand) -> String {
    match command.working_dir() {
        Some(dir) => format!("(cd {}) {program} {command}", dir.display()),
        None => format!("{program} {command}"),
    }
}

// ── Reports ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SolutionSummary {
    name: String,
    root: String,
    framework: String,
    projects: Vec<ProjectSummary>,
}

#[derive(Debug, Serialize)]
struct ProjectSummary {
    name: String,
    layer: Layer,
    kind: BuildUnitKind,
    path: String,
    references: Vec<Layer>,
    packages: Vec<String>,
}

#[derive(Debug, Serialize)]
struct DryRunReport {
    solution: SolutionSummary,
    commands: Vec<String>,
    files: Vec<String>,
}

impl From<&Solution> for SolutionSummary {
    fn from(solution: &Solution) -> Self {
        let ctx = solution.context();
        Self {
            name: ctx.name().to_string(),
            root: ctx.root().display().to_string(),
            framework: ctx.framework().to_string(),
            projects: solution
                .projects()
                .iter()
                .map(|p| ProjectSummary {
                    name: p.qualified_name().to_string(),
                    layer: p.layer(),
                    kind: p.kind(),
                    path: p.path().display().to_string(),
                    references: p.references().to_vec(),
                    packages: p.packages().to_vec(),
                })
                .collect(),
        }
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    ctx: &SolutionContext,
    config: &AppConfig,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Solution:   {}", ctx.name()))?;
    out.print(&format!("  Location:   {}", ctx.root().display()))?;
    out.print(&format!("  Framework:  {}", ctx.framework()))?;
    out.print(&format!("  Toolchain:  {}", config.toolchain.program))?;
    out.print(&format!("  Projects:   {}", Layer::COUNT))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    use std::io::IsTerminal as _;

    if !std::io::stdin().is_terminal() {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e.to_string()),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    Ok(true)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
