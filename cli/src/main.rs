//! pdfpages CLI - per-page PDF text extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfpages::render::{to_flat_text, to_json};
use pdfpages::{
    convert_file, extract_file_with_options, Conversion, ConvertOptions, ExtractOptions,
    JsonFormat, PreviewLength, SummaryView,
};

#[derive(Parser)]
#[command(name = "pdfpages")]
#[command(version)]
#[command(about = "Extract PDF page text to TXT and JSON", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    extract: ExtractArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
struct ExtractArgs {
    /// Extract pages one at a time instead of in parallel
    #[arg(long, global = true)]
    sequential: bool,

    /// Give up on a document after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

impl ExtractArgs {
    fn options(self) -> ExtractOptions {
        let mut options = ExtractOptions::new().with_parallel(!self.sequential);
        if let Some(secs) = self.timeout_secs {
            options = options.with_timeout(Duration::from_secs(secs));
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write {name}.txt and {name}.json next to each other
    Convert {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert PDF to flat text with page delimiters
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert PDF to a JSON record
    Json {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show page count, character count, and per-page previews
    Summary {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Characters shown per page (100-20000)
        #[arg(
            long,
            value_name = "N",
            env = "PDFPAGES_PREVIEW_CHARS",
            default_value_t = PreviewLength::DEFAULT
        )]
        preview_chars: usize,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let extract = cli.extract.options();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            compact,
        }) => cmd_convert(&input, output.as_deref(), compact, extract),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), extract),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, extract),
        Some(Commands::Summary {
            input,
            preview_chars,
        }) => cmd_summary(&input, preview_chars, extract),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), false, extract)
            } else {
                println!("{}", "Usage: pdfpages <FILE> [OUTPUT]".yellow());
                println!("       pdfpages --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    extract: ExtractOptions,
) -> CliResult {
    let output_dir = output_dir_for(input, output);

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Extracting pages...");
    let json_format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let options = ConvertOptions::new()
        .with_extract_options(extract)
        .with_json_format(json_format);
    let conversion = match convert_file(input, &options) {
        Ok(conversion) => conversion,
        Err(e) => {
            pb.abandon_with_message("Failed");
            return Err(e.into());
        }
    };
    pb.inc(1);

    fs::create_dir_all(&output_dir)?;

    pb.set_message("Writing text...");
    fs::write(output_dir.join(&conversion.text.file_name), &conversion.text.bytes)?;
    pb.inc(1);

    pb.set_message("Writing JSON...");
    fs::write(output_dir.join(&conversion.json.file_name), &conversion.json.bytes)?;
    pb.inc(1);

    pb.finish_with_message("Done!");
    log::info!(
        "Converted {} ({} pages) into {}",
        input.display(),
        conversion.summary.total_pages,
        output_dir.display()
    );

    print_outputs(&output_dir, &conversion);
    if conversion.summary.is_blank() {
        print_no_text_hint();
    }

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>, extract: ExtractOptions) -> CliResult {
    let doc = extract_file_with_options(input, extract)?;
    let text = to_flat_text(&doc);
    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    extract: ExtractOptions,
) -> CliResult {
    let doc = extract_file_with_options(input, extract)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&doc, format)?;
    write_or_print(output, &json)
}

fn cmd_summary(input: &Path, preview_chars: usize, extract: ExtractOptions) -> CliResult {
    // Reject out-of-range lengths before touching the document.
    let preview_length = PreviewLength::bounded(preview_chars)?;
    let options = ConvertOptions::new()
        .with_extract_options(extract)
        .with_preview_length(preview_length);
    let conversion = convert_file(input, &options)?;

    print_summary(&conversion.summary);
    if conversion.summary.is_blank() {
        print_no_text_hint();
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfpages".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Per-page PDF text extraction tool");
    println!();
    println!("License: MIT");
}

fn output_dir_for(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_outputs(output_dir: &Path, conversion: &Conversion) {
    println!("\n{}", "Output files:".green().bold());
    println!("  {} {}", "├─".dimmed(), output_dir.join(&conversion.text.file_name).display());
    println!("  {} {}", "└─".dimmed(), output_dir.join(&conversion.json.file_name).display());
}

fn print_summary(summary: &SummaryView) {
    println!("{}", "File Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), summary.filename);
    println!("{}: {}", "Pages".bold(), summary.total_pages);
    println!("{}: {}", "Characters".bold(), summary.total_chars);

    println!();
    println!("{}", "Page Previews".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for preview in &summary.previews {
        println!(
            "{} {} {}",
            format!("Page {}", preview.page_number).bold(),
            "-".dimmed(),
            format!("{} characters shown", preview.shown_chars).dimmed()
        );
        println!("{}", preview.text);
        println!();
    }
}

fn print_no_text_hint() {
    println!();
    println!("{}", "No text was extracted.".yellow());
    println!("  Scanned (image-only) PDFs need OCR, which is not supported.");
    println!("  Check whether the document has selectable text in a PDF viewer.");
}
