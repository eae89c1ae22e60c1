//! textstat - document text statistics from the command line
//!
//! Analyzes one file or one block of typed text per invocation and prints
//! line/word/character counts with the most frequent words.

mod input;
mod render;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::debug;

use textstat_core::extract::{ExtractConfig, ExtractorRegistry};
use textstat_core::{AnalysisConfig, AnalysisReport, Analyzer};

use input::{read_manual_text, read_piped_text};
use render::render_report;

const MANUAL_INPUT_NAME: &str = "Manual Input";

#[derive(Parser)]
#[command(name = "textstat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Text statistics and word frequencies for .txt, .docx, .pdf and .doc files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of most frequent words to report
    #[arg(long, default_value_t = AnalysisConfig::default().top_n)]
    top: usize,

    /// Program used to convert legacy .doc files
    #[arg(long, default_value = "antiword")]
    antiword: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a document
    File {
        /// Path to a .txt, .docx, .pdf or .doc file
        path: PathBuf,
    },

    /// Analyze text from stdin: typed input ends at the first empty line,
    /// piped input is read to the end
    Text,

    /// Show supported formats and whether their readers are available
    Formats,
}

struct App {
    registry: ExtractorRegistry,
    analyzer: Analyzer,
    top_n: usize,
    json: bool,
}

impl App {
    fn new(cli: &Cli) -> Self {
        let extract_config = ExtractConfig {
            antiword: cli.antiword.clone(),
        };

        Self {
            registry: ExtractorRegistry::with_defaults(&extract_config),
            analyzer: Analyzer::with_config(AnalysisConfig::with_top_n(cli.top)),
            top_n: cli.top,
            json: cli.json,
        }
    }

    fn analyze_file(&mut self, path: &Path) -> anyhow::Result<()> {
        debug!(path = %path.display(), "analyzing file");
        let report = self.analyzer.analyze_path(&self.registry, path);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.print(&report, &name)
    }

    fn analyze_manual(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let text = if stdin.is_terminal() {
            read_manual_text(stdin.lock())?
        } else {
            read_piped_text(stdin.lock())?
        };
        debug!(bytes = text.len(), "read manual input");
        let report = self.analyzer.run(Ok(text));
        self.print(&report, MANUAL_INPUT_NAME)
    }

    fn print(&self, report: &AnalysisReport, name: &str) -> anyhow::Result<()> {
        debug!(%report, display_name = name, "report ready");
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else {
            print!("{}", render_report(report, name, self.top_n));
        }
        Ok(())
    }

    fn print_formats(&self) {
        println!("{}", style("Supported formats").bold());
        for (format, availability) in self.registry.handlers() {
            let status = if availability.is_available() {
                style(availability.to_string()).green()
            } else {
                style(availability.to_string()).yellow()
            };
            println!("  .{:<5} {}", format.extension(), status);
        }
    }

    fn interactive(&mut self) -> anyhow::Result<()> {
        println!("{}", style("🎯 TEXT ANALYZER").bold());
        println!("{}", "=".repeat(40));
        println!("Supported formats: .txt, .docx, .pdf");
        println!(".doc files have limited support (requires antiword)");
        println!("{}", "=".repeat(40));
        println!();

        let options = ["📁 Analyze a file from path", "⌨️  Enter text manually"];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose an option")
            .items(&options)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let path: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Enter the path to your file")
                    .validate_with(|input: &String| -> Result<(), &str> {
                        if Path::new(input.trim()).exists() {
                            Ok(())
                        } else {
                            Err("❌ File not found. Please enter a valid file path.")
                        }
                    })
                    .interact_text()?;
                self.analyze_file(Path::new(path.trim()))
            }
            _ => {
                println!("\nEnter your text (press Enter on an empty line to finish):");
                self.analyze_manual()
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr at warn level so they stay out of the report.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(if cli.verbose {
            "info,textstat_core=debug"
        } else {
            "warn"
        })
        .init();

    let mut app = App::new(&cli);

    match &cli.command {
        Some(Commands::File { path }) => app.analyze_file(path),
        Some(Commands::Text) => app.analyze_manual(),
        Some(Commands::Formats) => {
            app.print_formats();
            Ok(())
        }
        None => app.interactive(),
    }
}
