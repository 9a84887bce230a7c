// ABOUTME: Main entry point for the text-slides program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use text_slides::{segment, utils, Config, Key, Mode, Modifiers, Session, SlidesError};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the slides a text file splits into
    Split(InputArgs),

    /// Insert a slide break at a cursor position
    InsertBreak(InsertBreakArgs),

    /// Step through the slides from the terminal
    Present(PresentArgs),

    /// Export slides to a PPTX file
    Export(ExportArgs),

    /// Watch a text file and re-split it on every change
    Watch(WatchArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Path to the text file ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,
}

#[derive(Args)]
struct InsertBreakArgs {
    /// Path to the text file ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Cursor position, in characters from the start of the text
    #[arg(short, long)]
    cursor: usize,

    /// Where to write the result (defaults to editing the input in place)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PresentArgs {
    /// Path to the text file
    #[arg(short, long)]
    input: PathBuf,

    /// Slide number to start from (1-based)
    #[arg(short, long, default_value_t = 1)]
    start: usize,
}

#[derive(Args)]
struct ExportArgs {
    /// Path to the text file ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output PPTX file
    #[arg(short, long, default_value = text_slides::pptx::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Presentation title
    #[arg(long)]
    title: Option<String>,

    /// Slide aspect ratio: '16:9' or '4:3'
    #[arg(long)]
    aspect_ratio: Option<String>,
}

#[derive(Args)]
struct WatchArgs {
    /// Path to the text file to watch
    #[arg(short, long)]
    input: PathBuf,

    /// PPTX file to regenerate on every change
    #[arg(long)]
    pptx: Option<PathBuf>,

    /// Debounce time in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    match cli.command {
        Some(Commands::Split(args)) => split(&args, &config),
        Some(Commands::InsertBreak(args)) => insert_break(&args),
        Some(Commands::Present(args)) => present(&args, &config),
        Some(Commands::Export(args)) => export(args, &config),
        Some(Commands::Watch(args)) => {
            let watch_config = config.get_watch_config(args.input, args.pptx, args.debounce_ms);
            text_slides::watch_text(watch_config)?;
            Ok(())
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    }
}

fn split(args: &InputArgs, config: &Config) -> anyhow::Result<()> {
    let text = utils::read_document(&args.input)?;
    let slides = segment::segment(&text);

    if slides.is_empty() {
        println!("No slides.");
        return Ok(());
    }

    for (i, slide) in slides.iter().enumerate() {
        println!("{}", segment::list_entry(i + 1, slide, config.preview_chars));
    }
    Ok(())
}

fn insert_break(args: &InsertBreakArgs) -> anyhow::Result<()> {
    let text = utils::read_document(&args.input)?;
    let (text, cursor) = segment::insert_break(&text, args.cursor);

    let target = match (&args.output, args.input.as_path() == Path::new("-")) {
        (Some(output), _) => Some(output.as_path()),
        (None, false) => Some(args.input.as_path()),
        (None, true) => None,
    };

    match target {
        Some(path) => {
            utils::ensure_parent_directory_exists(path)?;
            fs::write(path, &text)
                .with_context(|| format!("Failed to write output file {:?}", path))?;
            println!("Cursor: {}", cursor);
        }
        None => {
            print!("{}", text);
            eprintln!("Cursor: {}", cursor);
        }
    }
    Ok(())
}

fn present(args: &PresentArgs, config: &Config) -> anyhow::Result<()> {
    if args.input.as_path() == Path::new("-") {
        bail!("The presenter reads keys from stdin; pass the document as a file");
    }

    let text = utils::read_document(&args.input)?;
    let mut session = config.session(text);

    if !session.start_presentation(args.start.saturating_sub(1)) {
        println!("{}", SlidesError::EmptyPresentation);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    show_current_slide(&mut out, &session)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(key) = Key::from_name(&line) else {
            writeln!(out, "Unknown key: {:?}", line.trim())?;
            continue;
        };

        if session.handle_key(key, Modifiers::NONE).is_none() {
            continue;
        }
        if session.mode() == Mode::Editing {
            break;
        }
        show_current_slide(&mut out, &session)?;
    }
    Ok(())
}

fn show_current_slide(out: &mut impl Write, session: &Session) -> io::Result<()> {
    if let Some(slide) = session.current_slide() {
        writeln!(out, "\n{}\n", slide)?;
        writeln!(out, "[{}]", session.navigator().position_label())?;
    }
    out.flush()
}

fn export(args: ExportArgs, config: &Config) -> anyhow::Result<()> {
    let text = utils::read_document(&args.input)?;
    let session = config.session(text);
    let export_config = config.get_export_config(args.title, args.aspect_ratio);

    session.export(&args.output, &export_config)?;
    println!(
        "Exported {} slides to {:?}",
        session.slides().len(),
        args.output
    );
    Ok(())
}
