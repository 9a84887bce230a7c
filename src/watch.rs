// ABOUTME: Watch module for monitoring text file changes and re-segmenting
// ABOUTME: Re-splits the document and optionally re-exports PPTX on every save

use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::new_debouncer;

use crate::errors::{Result, SlidesError};
use crate::pptx::{self, ExportConfig};
use crate::segment;
use crate::utils;

/// Configuration for watch mode
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Path to the text file to watch
    pub input_path: PathBuf,

    /// Output PPTX file path, regenerated on every change when set
    pub pptx_output: Option<PathBuf>,

    /// Export settings used for regeneration
    pub export: ExportConfig,

    /// Length of the slide previews that get logged
    pub preview_chars: usize,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            pptx_output: None,
            export: ExportConfig::default(),
            preview_chars: segment::DEFAULT_PREVIEW_CHARS,
            debounce_ms: 500,
        }
    }
}

/// Watch a text file and re-segment it whenever it changes.
///
/// Blocks until the watcher channel closes. Failed regenerations are logged
/// and watching continues.
pub fn watch_text(config: WatchConfig) -> Result<()> {
    utils::validate_file_exists(&config.input_path)?;

    if let Some(pptx_output) = &config.pptx_output {
        utils::ensure_parent_directory_exists(pptx_output)?;
    }

    // Initial generation
    if let Err(e) = regenerate(&config) {
        error!("Initial generation failed: {}", e);
    }

    let (tx, rx) = mpsc::channel();

    let mut debouncer = new_debouncer(Duration::from_millis(config.debounce_ms), None, tx)
        .map_err(|e| SlidesError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    // Watch the containing directory so editors that replace files on save are seen
    let watch_path = match config.input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let abs_watch_path = utils::get_absolute_path(watch_path)?;
    debug!("Watching absolute path: {:?}", abs_watch_path);

    debouncer
        .watcher()
        .watch(&abs_watch_path, RecursiveMode::NonRecursive)
        .map_err(|e| {
            SlidesError::WatchError(format!(
                "Failed to start watching {:?}: {}",
                abs_watch_path, e
            ))
        })?;

    info!("Watching {:?} for changes", config.input_path);
    println!(
        "Watching {:?} for changes (Press Ctrl+C to stop)",
        config.input_path
    );

    let mut last_processed = Instant::now();

    for result in rx {
        match result {
            Ok(events) => {
                let relevant = events
                    .iter()
                    .any(|event| event.paths.iter().any(|path| is_relevant_path(path, &config)));

                let now = Instant::now();
                if relevant
                    && now.duration_since(last_processed) > Duration::from_millis(config.debounce_ms)
                {
                    match regenerate(&config) {
                        Ok(slides) => {
                            info!("Regenerated {} slides", slides.len());
                            last_processed = now;
                        }
                        Err(e) => error!("Failed to regenerate: {}", e),
                    }
                }
            }
            Err(errors) => {
                for e in errors {
                    error!("Watch error: {:?}", e);
                }
            }
        }
    }

    Ok(())
}

/// Whether a changed path is the watched input file
fn is_relevant_path(path: &Path, config: &WatchConfig) -> bool {
    if path == config.input_path {
        return true;
    }

    match (
        utils::get_absolute_path(path),
        utils::get_absolute_path(&config.input_path),
    ) {
        (Ok(changed), Ok(input)) => changed == input,
        _ => false,
    }
}

/// Re-read and re-segment the input, exporting when configured.
///
/// An empty document yields no slides and skips the export.
pub fn regenerate(config: &WatchConfig) -> Result<Vec<String>> {
    let text = utils::read_document(&config.input_path)?;
    let slides = segment::segment(&text);

    println!("{} slides", slides.len());
    for (i, slide) in slides.iter().enumerate() {
        println!("{}", segment::list_entry(i + 1, slide, config.preview_chars));
    }

    if let Some(pptx_output) = &config.pptx_output {
        if slides.is_empty() {
            info!("No slides yet, skipping PPTX export");
        } else {
            pptx::generate_pptx(&slides, pptx_output, &config.export)?;
            info!("PPTX regenerated: {:?}", pptx_output);
        }
    }

    Ok(slides)
}
