// ABOUTME: Library module for the text-slides program.
// ABOUTME: Contains segmentation, navigation, input dispatch and PPTX export.

// Reexport modules
pub mod config;
pub mod controls;
pub mod errors;
pub mod navigator;
pub mod pptx;
mod pptx_parts;
pub mod segment;
pub mod session;
pub mod utils;
pub mod watch;

// Reexport common types and functions
pub use config::Config;
pub use controls::{key_action, Action, Key, Modifiers, Mode, Swipe};
pub use errors::{Result, SlidesError};
pub use navigator::Navigator;
pub use pptx::{generate_pptx, ExportConfig};
pub use segment::{insert_break, join_slides, segment, SLIDE_BREAK};
pub use session::Session;
pub use watch::{watch_text, WatchConfig};
