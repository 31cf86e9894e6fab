//! Binary entry point for the unimodel CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Build a model from parser output and print it as JSON
//! unimodel build parsed.json
//!
//! # Use custom options, check the model and write it to a file
//! unimodel build parsed.json --config unimodel.toml --validate --output model.json
//!
//! # Print the default options
//! unimodel config
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use unimodel::cli::{default_config, run_build};
use unimodel::error::UnimodelError;
use unimodel::logging::{init_tracing, LogLevel};
use unimodel::output::write_json;

// ============================================================================
// CLI Structure
// ============================================================================

/// Build a unified structural model from language-neutral ASTs.
#[derive(Parser, Debug)]
#[command(name = "unimodel", version, about = "Unified source model extraction")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Global arguments shared by all subcommands.
#[derive(Parser, Debug)]
struct GlobalArgs {
    /// Log level for tracing output.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the model for a JSON bundle of parsed files.
    Build {
        /// Input bundle: `{ "files": [ { "path", "text", "unit" } ] }`.
        input: PathBuf,

        /// Adapter options in TOML.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the model here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Check class ownership and name uniqueness before writing.
        #[arg(long)]
        validate: bool,
    },
    /// Print the default adapter options as TOML.
    Config,
}

// ============================================================================
// Entry
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.global.log_level, cli.global.log_json);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr(), "error: {}", err);
            ExitCode::from(err.exit_code().code())
        }
    }
}

fn execute(cli: Cli) -> Result<(), UnimodelError> {
    match cli.command {
        Command::Build {
            input,
            config,
            output,
            validate,
        } => {
            let model = run_build(&input, config.as_deref(), validate)?;
            write_json(&model, output.as_deref())
        }
        Command::Config => {
            let text = default_config()?;
            let mut stdout = io::stdout();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| UnimodelError::io("<stdout>", e))
        }
    }
}
