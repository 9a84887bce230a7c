// ABOUTME: Presentation controller for the text-slides application
// ABOUTME: Owns the document, its slides and the navigation state

use crate::controls::{self, Action, Key, Modifiers, Mode, Swipe};
use crate::errors::Result;
use crate::navigator::Navigator;
use crate::pptx::{self, ExportConfig};
use crate::segment;
use log::{debug, info};
use std::path::Path;

/// Editing and presentation state for one document.
///
/// The slide list is always derived from the current text; replacing the
/// text re-segments it and moves back to the first slide.
#[derive(Debug, Clone)]
pub struct Session {
    text: String,
    cursor: usize,
    slides: Vec<String>,
    navigator: Navigator,
    mode: Mode,
    swipe_threshold: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            slides: Vec::new(),
            navigator: Navigator::default(),
            mode: Mode::Editing,
            swipe_threshold: controls::DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl Session {
    pub fn new(text: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.set_text(text);
        session
    }

    /// Minimum horizontal travel, in pixels, for swipes to navigate
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold
    }

    /// Replace the document text and re-segment it
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.cursor.min(self.text.chars().count());
        self.resegment();
    }

    fn resegment(&mut self) {
        self.slides = segment::segment(&self.text);
        self.navigator.reset(self.slides.len());
        // Presenting requires at least one slide
        if self.slides.is_empty() && self.mode == Mode::Presenting {
            info!("No slides left, leaving presentation mode");
            self.mode = Mode::Editing;
        }
        debug!("Session now has {} slides", self.slides.len());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the caret, clamped to the end of the text
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.chars().count());
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// A presentation can only start once there is at least one slide
    pub fn can_start(&self) -> bool {
        !self.slides.is_empty()
    }

    /// Insert a slide break at the caret and place the caret after it
    pub fn insert_break(&mut self) {
        let (text, cursor) = segment::insert_break(&self.text, self.cursor);
        self.text = text;
        self.cursor = cursor;
        self.resegment();
    }

    /// Enter presentation mode at `at`. Returns false without slides.
    pub fn start_presentation(&mut self, at: usize) -> bool {
        if !self.navigator.start(at) {
            return false;
        }
        self.mode = Mode::Presenting;
        info!(
            "Presenting from slide {}",
            self.navigator.position_label()
        );
        true
    }

    pub fn exit_presentation(&mut self) {
        self.mode = Mode::Editing;
    }

    pub fn next_slide(&mut self) -> bool {
        self.navigator.next()
    }

    pub fn prev_slide(&mut self) -> bool {
        self.navigator.prev()
    }

    /// Run a dispatched action against this session
    pub fn apply(&mut self, action: Action) {
        debug!("Applying {:?} in {:?} mode", action, self.mode);
        match action {
            Action::InsertBreak => self.insert_break(),
            Action::Next => {
                self.next_slide();
            }
            Action::Prev => {
                self.prev_slide();
            }
            Action::Exit => self.exit_presentation(),
        }
    }

    /// Feed a key press through the dispatch table
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Option<Action> {
        let action = controls::key_action(self.mode, key, modifiers)?;
        self.apply(action);
        Some(action)
    }

    /// Feed a touch swipe through the dispatch table. Only live while presenting.
    pub fn handle_swipe(&mut self, swipe: Swipe) -> Option<Action> {
        if self.mode != Mode::Presenting {
            return None;
        }
        let action = swipe.action(self.swipe_threshold)?;
        self.apply(action);
        Some(action)
    }

    /// Text of the slide the navigator points to
    pub fn current_slide(&self) -> Option<&str> {
        self.slides
            .get(self.navigator.current_index())
            .map(String::as_str)
    }

    /// Export the current slides as a PPTX file
    pub fn export(&self, output_file: &Path, config: &ExportConfig) -> Result<()> {
        pptx::generate_pptx(&self.slides, output_file, config)
    }
}
