use anyhow::Context;
use clap::Parser;
use repo_check::config::CheckerConfig;
use repo_check::linter::Actionlint;
use repo_check::{reporter, CheckCommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "repo-check", version, about = "Repository hygiene checks for docs, manifest and CI workflows")]
struct Cli {
    /// One of: lint, format, test, docs, docs-lint, workflows
    command: Option<String>,

    /// Repository root; defaults to the nearest ancestor containing .git
    #[arg(long, env = "REPO_CHECK_ROOT")]
    root_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match real_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<bool> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors share the failure status; --help and --version still succeed.
            let failed = err.use_stderr();
            err.print().context("print usage")?;
            return Ok(!failed);
        }
    };

    let command = match cli.command.as_deref() {
        Some(name) => match name.parse::<CheckCommand>() {
            Ok(command) => command,
            Err(unknown) => {
                eprintln!("{unknown}");
                return Ok(false);
            }
        },
        None => CheckCommand::default(),
    };

    let config = match cli.root_dir {
        Some(dir) => CheckerConfig::from_root(&dir),
        None => CheckerConfig::discover().context(
            "could not find repository root; run from within a git repository or use --root-dir",
        )?,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;

    let results = runtime.block_on(repo_check::run(command, &config, Actionlint::locate));

    for result in &results {
        reporter::print_result(result);
    }
    Ok(reporter::print_summary(&results))
}
