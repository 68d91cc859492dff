#![deny(missing_docs)]

//! # Convert Command
//!
//! Reads one OpenAPI/Swagger YAML file and writes the generated `.http` file(s).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use swagger2http_core::{convert, parse_document, AppError, AppResult, GeneratedFile, OutputMode};

/// Arguments for the conversion.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Input Swagger/OpenAPI YAML file.
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output HTTP file (default: stdout). With `--split`, the output directory (default: `.`).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Split output into multiple files by tag.
    #[arg(short, long)]
    pub split: bool,
}

impl ConvertArgs {
    /// The core output mode selected by the flags.
    pub fn mode(&self) -> OutputMode {
        if self.split {
            OutputMode::SplitByTag
        } else {
            OutputMode::Combined
        }
    }
}

/// Executes the conversion.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `stdout` - Receives the combined document when no output path is given, and
///   the `Created: <path>` confirmations otherwise.
pub fn execute(args: &ConvertArgs, stdout: &mut impl Write) -> AppResult<()> {
    // 1. Read Spec
    let yaml_content = fs::read_to_string(&args.input).map_err(|e| {
        AppError::General(format!("Failed to read {}: {}", args.input.display(), e))
    })?;

    // 2. Parse + Convert
    let document = parse_document(&yaml_content)?;
    let files = convert(&document, args.mode());
    tracing::debug!(files = files.len(), mode = ?args.mode(), "conversion finished");

    // 3. Write
    match args.mode() {
        OutputMode::Combined => write_combined(&files, args.output.as_deref(), stdout),
        OutputMode::SplitByTag => {
            let dir = args.output.as_deref().unwrap_or_else(|| Path::new("."));
            write_split(&files, dir, stdout)
        }
    }
}

fn write_combined(
    files: &[GeneratedFile],
    output: Option<&Path>,
    stdout: &mut impl Write,
) -> AppResult<()> {
    let content = files.first().map(|f| f.content.as_str()).unwrap_or_default();

    match output {
        Some(path) => {
            write_file(path, content)?;
            writeln!(stdout, "Created: {}", path.display())?;
        }
        None => {
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Writes every file into `dir`, stopping at the first failure.
fn write_split(files: &[GeneratedFile], dir: &Path, stdout: &mut impl Write) -> AppResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        AppError::General(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    for file in files {
        let path = dir.join(&file.name);
        write_file(&path, &file.content)?;
        writeln!(stdout, "Created: {}", path.display())?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    fs::write(path, content)
        .map_err(|e| AppError::General(format!("Failed to write file {}: {}", path.display(), e)))
}
