//! Application-wide configuration constants.

use std::time::Duration;

pub const NAME: &str = "File Viewer";
/// Settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "config.json";

/// Default window width.
pub const DEFAULT_WIDTH: u32 = 600;
/// Default window height.
pub const DEFAULT_HEIGHT: u32 = 400;
pub const DEFAULT_BG_COLOR: &str = "black";
pub const DEFAULT_FG_COLOR: &str = "lime";
pub const DEFAULT_ALPHA: f32 = 0.5;
pub const DEFAULT_ALPHA_STEP: f32 = 0.01;

/// Lower bound for both alpha and alpha step.
pub const ALPHA_MIN: f32 = 0.01;
/// Upper bound for both alpha and alpha step.
pub const ALPHA_MAX: f32 = 1.0;
/// Amount Ctrl+Shift+Up/Down moves the alpha step by.
pub const ALPHA_STEP_DELTA: f32 = 0.01;

/// Pixels added or removed per axis by the resize shortcuts.
pub const RESIZE_STEP: u32 = 20;
/// Smallest window edge the resize shortcuts allow.
pub const MIN_WINDOW_SIZE: u32 = 100;

/// Page size used until the text area has been measured.
pub const DEFAULT_LINES_PER_PAGE: usize = 20;
/// How often the handoff queue is drained, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 200;
/// How long a status message stays in the title bar.
pub const LOG_TIMEOUT: Duration = Duration::from_secs(4);
/// Longer timeout for the unreadable settings warning shown at startup.
pub const STARTUP_WARNING_TIMEOUT: Duration = Duration::from_secs(10);

pub const TITLE_BAR_HEIGHT: f32 = 24.0;

pub const HELP_TEXT: &str = "\
Shortcuts:
Ctrl+O: open file
Ctrl+Up: increase opacity
Ctrl+Down: decrease opacity
Ctrl+B: change background colour
Ctrl+F: change text colour
Ctrl+H: show/hide this help
Ctrl+T: toggle always on top
Ctrl+Shift+Up: increase opacity step
Ctrl+Shift+Down: decrease opacity step
Ctrl+Plus: enlarge window
Ctrl+Minus: shrink window
Space: next page
R: previous page
";
