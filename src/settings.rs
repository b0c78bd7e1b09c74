//! Persisted viewer settings and the JSON file behind them.

use crate::prelude::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::ErrorKind;

/// Everything that survives a restart.
///
/// Missing keys fall back to their defaults one by one, and keys this
/// version does not know about are carried through to the next save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub bg_color: String,
    pub fg_color: String,
    pub alpha: f32,
    pub alpha_step: f32,
    /// Last-read line offset per file path.
    pub files: BTreeMap<String, usize>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bg_color: DEFAULT_BG_COLOR.to_string(),
            fg_color: DEFAULT_FG_COLOR.to_string(),
            alpha: DEFAULT_ALPHA,
            alpha_step: DEFAULT_ALPHA_STEP,
            files: BTreeMap::new(),
            extra: Map::new(),
        }
    }
}

/// Rounds to 4 decimal places so repeated steps stay on a clean grid.
fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

/// Key used for a file in the `files` table.
pub fn file_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Settings {
    /// Pull every field back into its legal range.
    pub fn clamp(&mut self) {
        self.alpha = self.alpha.clamp(ALPHA_MIN, ALPHA_MAX);
        self.alpha_step = self.alpha_step.clamp(ALPHA_MIN, ALPHA_MAX);
        self.width = self.width.max(MIN_WINDOW_SIZE);
        self.height = self.height.max(MIN_WINDOW_SIZE);
    }

    pub fn increase_alpha(&mut self) -> f32 {
        self.alpha = round4((self.alpha + self.alpha_step).min(ALPHA_MAX));
        self.alpha
    }

    pub fn decrease_alpha(&mut self) -> f32 {
        self.alpha = round4((self.alpha - self.alpha_step).max(ALPHA_MIN));
        self.alpha
    }

    pub fn increase_alpha_step(&mut self) -> f32 {
        self.alpha_step = round4((self.alpha_step + ALPHA_STEP_DELTA).min(ALPHA_MAX));
        self.alpha_step
    }

    pub fn decrease_alpha_step(&mut self) -> f32 {
        self.alpha_step = round4((self.alpha_step - ALPHA_STEP_DELTA).max(ALPHA_MIN));
        self.alpha_step
    }

    pub fn grow(&mut self) {
        self.width = self.width.saturating_add(RESIZE_STEP);
        self.height = self.height.saturating_add(RESIZE_STEP);
    }

    pub fn shrink(&mut self) {
        self.width = self.width.saturating_sub(RESIZE_STEP).max(MIN_WINDOW_SIZE);
        self.height = self.height.saturating_sub(RESIZE_STEP).max(MIN_WINDOW_SIZE);
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn set_color(&mut self, target: ColorTarget, color: String) {
        match target {
            ColorTarget::Background => self.bg_color = color,
            ColorTarget::Foreground => self.fg_color = color,
        }
    }

    /// Saved line offset for `path`, 0 if the file has never been opened.
    pub fn offset_for(&self, path: &Path) -> usize {
        self.files.get(&file_key(path)).copied().unwrap_or(0)
    }

    pub fn record_offset(&mut self, path: &Path, offset: usize) {
        self.files.insert(file_key(path), offset);
    }
}

/// Reads and writes [`Settings`] as a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(SETTINGS_FILE)
    }
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    /// Load the settings file. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, AppError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", self.path.display());
                return Ok(Settings::default());
            }
            Err(e) => return Err(e.into()),
        };
        let mut settings: Settings = serde_json::from_str(&text)?;
        settings.clamp();
        Ok(settings)
    }

    /// Like [`load`](Self::load) but never fails: a broken file is handed
    /// back as an error next to the defaults so the caller can report it.
    pub fn load_or_default(&self) -> (Settings, Option<AppError>) {
        match self.load() {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        }
    }

    /// Overwrite the settings file. Written to a sibling temp file first and
    /// renamed into place.
    pub fn save(&self, settings: &Settings) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(settings)?;
        let tmp_path = self.temp_path();
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
