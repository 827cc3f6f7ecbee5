//! CLI for generating the course materials.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coursegen_core::config::{INDEX_FILENAME, PDF_FILENAME, PPTX_FILENAME};
use coursegen_core::content::course_deck;
use coursegen_core::{BuildConfig, BuildInfo, Deck, OutputWriter};
use coursegen_pdf::{default_renderers, locate_workbook, read_workbook, render_with_fallback, RenderJob};
use coursegen_pptx::PptxWriter;
use std::path::PathBuf;

/// Generate the course HTML slides, PPTX deck, and PDF workbook.
#[derive(Parser, Debug)]
#[command(name = "coursegen")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Project root (default: current directory)
    #[arg(long)]
    project_dir: Option<PathBuf>,

    /// Output directory (default: <project-dir>/output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the per-section HTML pages and index.html
    Slides,
    /// Generate the PPTX slide deck
    Pptx,
    /// Generate the PDF workbook via the renderer fallback chain
    Pdf,
    /// Generate everything
    All,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let project_dir = args
        .project_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let mut cfg = BuildConfig::new(&project_dir);
    if let Some(output) = &args.output {
        cfg = cfg.with_output_dir(output.clone());
    }

    let deck = course_deck();
    let writer = OutputWriter::new(&cfg.output_dir)
        .with_context(|| format!("failed to create {}", cfg.output_dir.display()))?;

    let mut generated = Vec::new();
    match args.command {
        Command::Slides => {
            generated.extend(generate_slides(&cfg, &deck, &writer)?);
        }
        Command::Pptx => {
            generated.push(generate_pptx(&cfg, &deck, &writer)?);
        }
        Command::Pdf => {
            generated.push(generate_pdf(&cfg, &writer)?);
        }
        Command::All => {
            generated.extend(generate_slides(&cfg, &deck, &writer)?);
            generated.push(generate_pptx(&cfg, &deck, &writer)?);
            generated.push(generate_pdf(&cfg, &writer)?);
        }
    }

    let info = BuildInfo::new(&cfg, &deck, generated.clone());
    writer
        .write_build_info(&info)
        .context("failed to write build_info.json")?;

    if args.verbose {
        eprintln!("Generated {} files in {}:", generated.len(), cfg.output_dir.display());
        for name in &generated {
            eprintln!("  {name}");
        }
    }

    Ok(())
}

/// Write the per-section pages and the landing page, and copy any
/// pre-rendered assets alongside them.
fn generate_slides(cfg: &BuildConfig, deck: &Deck, writer: &OutputWriter) -> Result<Vec<String>> {
    deck.validate().context("content table is invalid")?;

    let mut generated = Vec::new();
    for section in &deck.sections {
        let page = coursegen_html::render_section_page(section);
        let name = section.page_filename();
        writer
            .write_str(&name, &page)
            .with_context(|| format!("failed to write {name}"))?;
        generated.push(name);
    }

    let index = coursegen_html::render_index(deck, cfg);
    writer
        .write_str(INDEX_FILENAME, &index)
        .context("failed to write index.html")?;
    generated.push(INDEX_FILENAME.to_string());

    // Pre-rendered images and decks are optional; copy them when present.
    if cfg.assets_dir.is_dir() {
        log::debug!("copying assets from {}", cfg.assets_dir.display());
        for entry in std::fs::read_dir(&cfg.assets_dir)? {
            let entry = entry?;
            let path = entry.path();
            let copied = if path.is_dir() {
                writer.copy_dir(&path)?
            } else {
                writer.copy_file(&path)?
            };
            if let Some(name) = copied.file_name().and_then(|n| n.to_str()) {
                generated.push(name.to_string());
            }
        }
    }

    Ok(generated)
}

fn generate_pptx(cfg: &BuildConfig, deck: &Deck, writer: &OutputWriter) -> Result<String> {
    let pptx = PptxWriter::new(&cfg.build_date, &cfg.build_date_kr);
    let bytes = pptx
        .write_to_vec(deck)
        .context("failed to build the PPTX package")?;
    writer
        .write_bytes(PPTX_FILENAME, &bytes)
        .context("failed to write the PPTX file")?;
    log::debug!("PPTX: {} slides, {} bytes", deck.sections.len(), bytes.len());
    Ok(PPTX_FILENAME.to_string())
}

fn generate_pdf(cfg: &BuildConfig, writer: &OutputWriter) -> Result<String> {
    let workbook = locate_workbook(&cfg.workbook_candidates)
        .context("cannot generate the PDF workbook")?;
    log::debug!("workbook source: {}", workbook.display());

    let markdown = read_workbook(&workbook)
        .with_context(|| format!("failed to read {}", workbook.display()))?;
    let html = coursegen_html::workbook_page(&markdown);

    let job = RenderJob {
        workbook,
        markdown,
        html,
        output: writer.dir().join(PDF_FILENAME),
    };

    let renderer = render_with_fallback(&default_renderers(), &job)
        .context("could not generate the PDF workbook")?;
    log::info!("workbook rendered with '{renderer}'");
    Ok(PDF_FILENAME.to_string())
}
