// ABOUTME: Input dispatch module for the text-slides application
// ABOUTME: Maps key presses and touch swipes to presentation actions

/// Minimum horizontal travel, in pixels, for a swipe to count
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Whether the user is editing text or stepping through slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    Presenting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    Escape,
    Char(char),
}

impl Key {
    /// Parse a key name as typed into the terminal presenter.
    /// An empty line stands for Enter.
    pub fn from_name(name: &str) -> Option<Key> {
        let name = name.trim();
        match name.to_lowercase().as_str() {
            "" | "enter" | "return" => Some(Key::Enter),
            "space" => Some(Key::Space),
            "right" | "arrowright" | "n" | "next" => Some(Key::ArrowRight),
            "left" | "arrowleft" | "p" | "prev" => Some(Key::ArrowLeft),
            "esc" | "escape" | "q" | "quit" => Some(Key::Escape),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InsertBreak,
    Next,
    Prev,
    Exit,
}

/// Keyboard dispatch table.
///
/// Ctrl+Enter / Alt+Enter insert a slide break in any mode. Navigation keys
/// are only live while presenting.
pub fn key_action(mode: Mode, key: Key, modifiers: Modifiers) -> Option<Action> {
    if key == Key::Enter && (modifiers.ctrl || modifiers.alt) {
        return Some(Action::InsertBreak);
    }

    if mode != Mode::Presenting {
        return None;
    }

    match key {
        Key::ArrowRight | Key::Space | Key::Enter => Some(Action::Next),
        Key::ArrowLeft => Some(Action::Prev),
        Key::Escape => Some(Action::Exit),
        Key::Char(_) => None,
    }
}

/// A completed touch gesture, reduced to its horizontal screen positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub start_x: f64,
    pub end_x: f64,
}

impl Swipe {
    pub fn new(start_x: f64, end_x: f64) -> Self {
        Self { start_x, end_x }
    }

    /// Swiping left advances, swiping right goes back. Travel within the
    /// threshold (including purely vertical gestures) does nothing.
    pub fn action(&self, threshold: f64) -> Option<Action> {
        if self.end_x < self.start_x - threshold {
            Some(Action::Next)
        } else if self.end_x > self.start_x + threshold {
            Some(Action::Prev)
        } else {
            None
        }
    }
}
