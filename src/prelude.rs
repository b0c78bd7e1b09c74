// std
pub use std::collections::BTreeMap;
pub use std::fs;
pub use std::path::{Path, PathBuf};
pub use std::time::{Duration, Instant};

// external crates
pub use eframe::{
    CreationContext,
    egui::{
        self, CentralPanel, Color32, Context, Key, Layout, Modifiers, Pos2, RichText, TextStyle,
        Ui, Vec2, ViewportCommand, Window, pos2,
    },
};
pub use log::{debug, info, warn};

// crate modules
pub use crate::{
    app::ViewerApp,
    color::{format_color, parse_color_or},
    config::*,
    document::{Document, Pagination},
    error::AppError,
    input::{Action, PollTimer},
    loader::{FileLoader, LoadEvent},
    settings::{Settings, SettingsStore},
    ui::log::{UiLogLevel, UiLogger},
    window::{ColorTarget, ViewState, WindowController},
};
