//! devkit CLI - developer text utilities around a lexical SQL formatter

use clap::{Parser, Subcommand};
use devkit::sql::{Dialect, FormatConfig, KeywordCase};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use walkdir::WalkDir;

/// A toolbox of developer text utilities built around a lexical SQL formatter
#[derive(Parser)]
#[command(name = "devkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct FormatOpts {
    /// Spaces per indentation level (1-8)
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Keyword casing policy
    #[arg(long, value_enum, default_value = "upper")]
    case: KeywordCase,

    /// SQL dialect tag (informational only)
    #[arg(long, value_enum, default_value = "generic")]
    dialect: Dialect,
}

impl FormatOpts {
    fn config(&self) -> FormatConfig {
        FormatConfig {
            indent_width: self.indent,
            keyword_case: self.case,
            dialect: self.dialect,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Format SQL files
    Fmt {
        /// Write formatted output back to files
        #[arg(short, long)]
        write: bool,

        #[command(flatten)]
        opts: FormatOpts,

        /// Files or directories to format (use - for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Check if files are formatted (exit code 1 if not)
    Check {
        #[command(flatten)]
        opts: FormatOpts,

        /// Files or directories to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List the available tools
    List,
    /// Run a tool by name with JSON arguments
    Run {
        /// Tool name (see `devkit list`)
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt { write, opts, files } => run_fmt(&files, write, &opts.config()),
        Commands::Check { opts, files } => run_check(&files, &opts.config()),
        Commands::List => run_list(),
        Commands::Run { tool, args } => run_tool(&tool, &args),
    }
}

/// Run the fmt command
fn run_fmt(files: &[PathBuf], write_mode: bool, config: &FormatConfig) -> ExitCode {
    let mut had_errors = false;

    for file_path in files {
        if file_path == Path::new("-") {
            match read_stdin().and_then(|contents| devkit::format_sql(&contents, config)) {
                Ok(report) => {
                    for warning in &report.warnings {
                        eprintln!("<stdin>: warning: {warning}");
                    }
                    print!("{}", report.text);
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    had_errors = true;
                }
            }
            continue;
        }

        for entry in discover_sql_files(file_path) {
            if let Err(e) = format_file(&entry, write_mode, config) {
                eprintln!("{}: {e}", entry.display());
                had_errors = true;
            }
        }
    }

    if had_errors {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

/// Run the check command
fn run_check(files: &[PathBuf], config: &FormatConfig) -> ExitCode {
    let mut needs_formatting = false;
    let mut had_errors = false;

    for file_path in files {
        for entry in discover_sql_files(file_path) {
            match check_file(&entry, config) {
                Ok(formatted) => {
                    if !formatted {
                        eprintln!("{}: needs formatting", entry.display());
                        needs_formatting = true;
                    }
                }
                Err(e) => {
                    eprintln!("{}: {e}", entry.display());
                    had_errors = true;
                }
            }
        }
    }

    if had_errors {
        ExitCode::from(2)
    } else if needs_formatting {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Run the list command
fn run_list() -> ExitCode {
    for tool in devkit::tools::TOOLS {
        println!("{:<18} {}", tool.name, tool.description);
    }
    ExitCode::SUCCESS
}

/// Run one tool invocation
fn run_tool(name: &str, args: &str) -> ExitCode {
    let args: serde_json::Value = match serde_json::from_str(args) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: --args is not valid JSON: {e}");
            return ExitCode::from(2);
        }
    };

    match devkit::tools::dispatch(name, &args) {
        Ok(output) => {
            for warning in &output.warnings {
                eprintln!("warning: {warning}");
            }
            println!("{}", output.text);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Discover SQL files from a path (file, directory, or glob pattern)
fn discover_sql_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    if path.is_dir() {
        let mut files = Vec::new();
        for entry in WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "sql") {
                files.push(path.to_path_buf());
            }
        }
        return files;
    }

    if let Ok(paths) = glob::glob(path.to_str().unwrap_or("")) {
        return paths
            .filter_map(|p| p.ok())
            .filter(|p| p.is_file())
            .filter(|p| p.extension().is_some_and(|e| e == "sql"))
            .collect();
    }

    vec![]
}

/// Format a single file
fn format_file(path: &Path, write_mode: bool, config: &FormatConfig) -> devkit::Result<()> {
    let contents = fs::read_to_string(path)?;
    let report = devkit::format_sql(&contents, config)?;
    debug!(path = %path.display(), changed = report.text != contents, "formatted");

    for warning in &report.warnings {
        eprintln!("{}: warning: {warning}", path.display());
    }

    if report.text == contents {
        return Ok(());
    }

    if write_mode {
        fs::write(path, &report.text)?;
    } else {
        print!("{}", report.text);
    }

    Ok(())
}

/// Check a single file
fn check_file(path: &Path, config: &FormatConfig) -> devkit::Result<bool> {
    let contents = fs::read_to_string(path)?;
    devkit::check(&contents, config)
}

/// Read all of stdin
fn read_stdin() -> devkit::Result<String> {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
}
