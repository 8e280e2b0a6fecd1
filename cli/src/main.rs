//! minuteset CLI - minutes typesetting tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;

use minuteset::{segment, JsonFormat, LineRole, RenderOptions};

#[derive(Parser)]
#[command(name = "minuteset")]
#[command(version)]
#[command(about = "Typeset council-meeting minutes to screen JSON, pages, and PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the minutes as a paginated PDF
    Pdf {
        /// Input minutes text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file (defaults to the input name with .pdf)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Meeting date for the running page header (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Companion video URL for review-marker links
        #[arg(long, value_name = "URL")]
        video_url: Option<String>,
    },

    /// Render the interactive screen tree as JSON
    Screen {
        /// Input minutes text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Companion video URL for review-marker links
        #[arg(long, value_name = "URL")]
        video_url: Option<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render the paginated layout (placed spans) as JSON
    Pages {
        /// Input minutes text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Meeting date for the running page header (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show segmentation statistics for a minutes file
    Info {
        /// Input minutes text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pdf {
            input,
            output,
            date,
            video_url,
        } => cmd_pdf(&input, output.as_deref(), date, video_url.as_deref()),
        Commands::Screen {
            input,
            output,
            video_url,
            compact,
        } => cmd_screen(&input, output.as_deref(), video_url.as_deref(), compact),
        Commands::Pages {
            input,
            output,
            date,
            compact,
        } => cmd_pages(&input, output.as_deref(), date, compact),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(input)?
    };
    log::debug!("read {} bytes from {}", text.len(), input.display());
    Ok(text)
}

fn render_options(date: Option<NaiveDate>, video_url: Option<&str>) -> RenderOptions {
    let mut options = RenderOptions::new();
    if let Some(date) = date {
        options = options.with_meeting_date(date);
    }
    if let Some(url) = video_url {
        options = options.with_video_url(url);
    }
    options
}

fn write_output(
    output: Option<&Path>,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn cmd_pdf(
    input: &Path,
    output: Option<&Path>,
    date: Option<NaiveDate>,
    video_url: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let options = render_options(date, video_url);
    let bytes = minuteset::to_pdf(&text, &options)?;

    let output_path = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}.pdf", stem))
    });
    fs::write(&output_path, &bytes)?;

    let pages = minuteset::paginate_text(&text, &options)?.page_count();
    println!(
        "{} {} ({} page{})",
        "Wrote".green().bold(),
        output_path.display(),
        pages,
        if pages == 1 { "" } else { "s" }
    );
    Ok(())
}

fn cmd_screen(
    input: &Path,
    output: Option<&Path>,
    video_url: Option<&str>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let options = render_options(None, video_url);
    let screen = minuteset::screen_tree(&text, &options);
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = minuteset::to_json(&screen, format)?;
    write_output(output, &json)
}

fn cmd_pages(
    input: &Path,
    output: Option<&Path>,
    date: Option<NaiveDate>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let options = render_options(date, None);
    let paged = minuteset::paginate_text(&text, &options)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = minuteset::to_json(&paged, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = segment(&text);

    println!("{}", "Document Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Title lines".bold(), doc.title_lines.len());
    println!("{}: {}", "Body lines".bold(), doc.body.len());
    println!("{}: {}", "Sections".bold(), doc.section_count());

    let emphasized = doc.body.iter().filter(|l| l.bold).count();
    let indented = doc
        .body
        .iter()
        .filter(|l| l.role == LineRole::SectionBody)
        .count();
    println!("{}: {}", "Emphasized lines".bold(), emphasized);
    println!("{}: {}", "Indented lines".bold(), indented);

    if doc.signature.is_empty() {
        println!("{}: {}", "Signature".bold(), "none".dimmed());
    } else {
        println!(
            "{}: {} / {}",
            "Signature".bold(),
            doc.signature.left.name,
            doc.signature.right.name
        );
    }
    Ok(())
}
