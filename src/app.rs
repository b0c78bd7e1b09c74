//! Main application state and logic.

use crate::input::read_shortcuts;
use crate::prelude::*;

use std::thread::JoinHandle;

/// Frames to wait for a requested resize before measuring anyway.
const RELAYOUT_FRAMES: u8 = 10;

/// The main application struct, holding all state.
pub struct ViewerApp {
    pub store: SettingsStore,
    pub settings: Settings,
    pub pagination: Pagination,
    pub loader: FileLoader,
    pub window: WindowController,
    pub ui_logger: UiLogger,
    pub poll_timer: PollTimer,
    /// Open colour picker and the colour it currently holds.
    pub color_picker: Option<(ColorTarget, Color32)>,
    /// Size requested by a resize shortcut, and frames left to wait for it.
    pub pending_relayout: Option<(Vec2, u8)>,
    closing: bool,
}

impl ViewerApp {
    /// Create the app for eframe.
    pub fn new(
        cc: &CreationContext,
        store: SettingsStore,
        settings: Settings,
        load_error: Option<AppError>,
    ) -> Self {
        let mut app = Self::from_parts(store, settings, load_error);
        app.loader = FileLoader::with_waker(cc.egui_ctx.clone());
        app
    }

    /// Everything except the egui hookup.
    pub fn from_parts(
        store: SettingsStore,
        settings: Settings,
        load_error: Option<AppError>,
    ) -> Self {
        let mut ui_logger = UiLogger::new();
        if let Some(e) = load_error {
            ui_logger.warn(
                format!("{} is unreadable, using defaults: {}", store.path().display(), e),
                Some(STARTUP_WARNING_TIMEOUT),
            );
        }
        let window = WindowController::new(&settings, &mut ui_logger);
        Self {
            store,
            settings,
            pagination: Pagination::default(),
            loader: FileLoader::default(),
            window,
            ui_logger,
            poll_timer: PollTimer::default(),
            color_picker: None,
            pending_relayout: None,
            closing: false,
        }
    }

    /// Write the settings file, reporting failures in the title bar.
    pub fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.settings) {
            self.ui_logger
                .error(format!("Failed to save settings: {}", e), None);
        }
    }

    pub fn apply(&mut self, action: Action) {
        debug!("{:?}", action);
        match action {
            Action::OpenFile => self.open_file_dialog(),
            Action::IncreaseAlpha => {
                self.settings.increase_alpha();
                self.persist();
            }
            Action::DecreaseAlpha => {
                self.settings.decrease_alpha();
                self.persist();
            }
            Action::IncreaseAlphaStep => {
                self.settings.increase_alpha_step();
                self.persist();
            }
            Action::DecreaseAlphaStep => {
                self.settings.decrease_alpha_step();
                self.persist();
            }
            Action::PickBackground => self.open_color_picker(ColorTarget::Background),
            Action::PickForeground => self.open_color_picker(ColorTarget::Foreground),
            Action::ToggleHelp => self.window.toggle_help(),
            Action::ToggleTopmost => {
                let topmost = self.window.toggle_topmost();
                info!("Always on top: {}", topmost);
            }
            Action::GrowWindow => {
                self.settings.grow();
                self.after_resize();
            }
            Action::ShrinkWindow => {
                self.settings.shrink();
                self.after_resize();
            }
            Action::NextPage => {
                if self.pagination.next_page() {
                    self.window.show_document();
                }
            }
            Action::PreviousPage => {
                if self.pagination.previous_page() {
                    self.window.show_document();
                }
            }
        }
    }

    fn open_file_dialog(&mut self) {
        if let Some(path) = crate::text_filters!().set_title("Open text file").pick_file() {
            self.open_path(path);
        }
    }

    /// Start loading `path` at its saved offset.
    pub fn open_path(&mut self, path: PathBuf) -> JoinHandle<()> {
        let resume_offset = self.settings.offset_for(&path);
        self.loader.open(path, resume_offset)
    }

    /// Apply everything the workers have posted.
    pub fn poll_queue(&mut self) {
        for event in self.loader.poll() {
            match event {
                LoadEvent::Ready {
                    document,
                    resume_offset,
                } => {
                    let name = document.path.display().to_string();
                    self.pagination.load_document(document, resume_offset);
                    self.window.show_document();
                    self.ui_logger.info(
                        format!(
                            "{} ({}/{})",
                            name,
                            self.pagination.page_index() + 1,
                            self.pagination.total_pages().max(1)
                        ),
                        None,
                    );
                }
                LoadEvent::Failed { path, error } => {
                    self.window.show_error(error.to_string());
                    self.ui_logger
                        .error(format!("Failed to open {}: {}", path.display(), error), None);
                }
            }
        }
    }

    pub fn open_color_picker(&mut self, target: ColorTarget) {
        self.color_picker = Some((target, self.window.color(target)));
    }

    /// Store a colour chosen in the picker.
    pub fn confirm_color(&mut self, target: ColorTarget, color: Color32) {
        let hex = format_color(color);
        self.window.set_color(target, &hex, &mut self.ui_logger);
        self.settings.set_color(target, hex);
        self.persist();
    }

    fn after_resize(&mut self) {
        let size = self.settings.size();
        self.window.resize(size);
        self.persist();
        self.pending_relayout = Some((size, RELAYOUT_FRAMES));
    }

    /// Re-measure pages once a requested resize has landed.
    pub fn relayout(&mut self, inner_size: Option<Vec2>, visible_line_capacity: usize) {
        let Some((target, frames_left)) = self.pending_relayout else {
            return;
        };
        let arrived = inner_size.is_some_and(|size| (size - target).length() < 1.0);
        if arrived || frames_left == 0 {
            self.pending_relayout = None;
            if self.pagination.recompute_lines_per_page(visible_line_capacity) {
                info!(
                    "Showing {} lines per page",
                    self.pagination.lines_per_page()
                );
            }
        } else {
            self.pending_relayout = Some((target, frames_left - 1));
        }
    }

    /// Remember where the open file was left.
    pub fn save_last_line(&mut self) {
        let Some(path) = self.pagination.path().map(Path::to_path_buf) else {
            return;
        };
        let offset = self.pagination.resume_offset();
        info!("Leaving {} at line {}", path.display(), offset);
        self.settings.record_offset(&path, offset);
        self.persist();
    }

    /// Persist the reading position and close the window.
    pub fn close(&mut self) {
        if !self.closing {
            self.closing = true;
            self.save_last_line();
        }
        self.window.close();
    }

    /// Text area owns the keyboard unless a dialog or text field does.
    fn text_focused(&self, ctx: &egui::Context) -> bool {
        self.color_picker.is_none() && !ctx.wants_keyboard_input()
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.closing {
            self.closing = true;
            self.save_last_line();
        }

        let now = Instant::now();
        if self.poll_timer.due(now) {
            self.poll_queue();
        }

        let text_focused = self.text_focused(ctx);
        let actions = ctx.input_mut(|i| read_shortcuts(i, text_focused));
        for action in actions {
            self.apply(action);
        }

        self.ui_logger.clear_expired(now);

        self.display_title_bar(ctx);
        self.display_page(ctx);
        self.display_color_picker(ctx);

        for command in self.window.take_commands() {
            ctx.send_viewport_cmd(command);
        }

        let mut wake_in = self.poll_timer.remaining(now);
        if let Some(left) = self.ui_logger.time_left(now) {
            wake_in = wake_in.min(left);
        }
        ctx.request_repaint_after(wake_in);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Panels paint their own translucent fill.
        [0.0, 0.0, 0.0, 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> ViewerApp {
        let store = SettingsStore::new(dir.path().join(SETTINGS_FILE));
        let (settings, error) = store.load_or_default();
        ViewerApp::from_parts(store, settings, error)
    }

    fn write_lines(dir: &TempDir, name: &str, count: usize) -> PathBuf {
        let path = dir.path().join(name);
        let text: String = (1..=count).map(|n| format!("line {n}\n")).collect();
        fs::write(&path, text).unwrap();
        path
    }

    fn open_and_wait(app: &mut ViewerApp, path: &Path) {
        app.open_path(path.to_path_buf()).join().unwrap();
        app.poll_queue();
    }

    #[test]
    fn fresh_start_pages_through_a_file() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        assert_eq!(app.settings, Settings::default());
        assert_eq!(app.window.view(), &ViewState::Help);

        let path = write_lines(&dir, "book.txt", 45);
        open_and_wait(&mut app, &path);
        assert_eq!(app.pagination.total_pages(), 3);
        assert_eq!(app.window.view(), &ViewState::Document);

        app.apply(Action::NextPage);
        app.apply(Action::NextPage);
        assert_eq!(app.pagination.page_index(), 2);
        let text = app.window.render(&app.pagination);
        assert!(text.starts_with("line 41\n"));
        assert!(text.ends_with("line 45\n"));

        app.apply(Action::NextPage);
        assert_eq!(app.pagination.page_index(), 2);
    }

    fn press_keys(app: &mut ViewerApp, keys: &[Key]) {
        let events = keys
            .iter()
            .map(|&key| egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            })
            .collect();
        let ctx = egui::Context::default();
        let mut actions = Vec::new();
        let _ = ctx.run(
            egui::RawInput {
                events,
                ..Default::default()
            },
            |ctx| actions = ctx.input_mut(|i| read_shortcuts(i, true)),
        );
        for action in actions {
            app.apply(action);
        }
    }

    #[test]
    fn keys_pressed_in_one_frame_apply_in_order() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let path = write_lines(&dir, "book.txt", 45);
        open_and_wait(&mut app, &path);

        // R is a no-op on the first page, then Space advances.
        press_keys(&mut app, &[Key::R, Key::Space]);
        assert_eq!(app.pagination.page_index(), 1);

        press_keys(&mut app, &[Key::Space, Key::Space]);
        assert_eq!(app.pagination.page_index(), 2);

        press_keys(&mut app, &[Key::Space, Key::R, Key::R]);
        assert_eq!(app.pagination.page_index(), 0);
    }

    #[test]
    fn reopening_resumes_on_the_same_page() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(&dir, "book.txt", 100);

        let mut app = app_in(&dir);
        open_and_wait(&mut app, &path);
        for _ in 0..3 {
            app.apply(Action::NextPage);
        }
        app.close();
        assert!(app
            .window
            .take_commands()
            .iter()
            .any(|cmd| matches!(cmd, ViewportCommand::Close)));

        let mut app = app_in(&dir);
        assert_eq!(app.settings.offset_for(&path), 60);
        open_and_wait(&mut app, &path);
        assert_eq!(app.pagination.page_index(), 3);
    }

    #[test]
    fn opacity_changes_are_persisted() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.apply(Action::IncreaseAlphaStep);
        app.apply(Action::IncreaseAlpha);
        assert_eq!(app.settings.alpha_step, 0.02);
        assert_eq!(app.settings.alpha, 0.52);

        let reloaded = app_in(&dir);
        assert_eq!(reloaded.settings, app.settings);
    }

    #[test]
    fn picked_colour_is_stored_as_hex() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.apply(Action::PickBackground);
        assert_eq!(
            app.color_picker,
            Some((ColorTarget::Background, Color32::BLACK))
        );

        app.confirm_color(ColorTarget::Background, Color32::from_rgb(0x11, 0x22, 0x33));
        assert_eq!(app.settings.bg_color, "#112233");
        assert_eq!(
            app.window.color(ColorTarget::Background),
            Color32::from_rgb(0x11, 0x22, 0x33)
        );
        assert_eq!(app_in(&dir).settings.bg_color, "#112233");
    }

    #[test]
    fn help_toggle_round_trips_document() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(&dir, "book.txt", 30);
        let mut app = app_in(&dir);
        open_and_wait(&mut app, &path);

        let page = app.window.render(&app.pagination);
        app.apply(Action::ToggleHelp);
        assert_eq!(app.window.render(&app.pagination), HELP_TEXT);
        app.apply(Action::ToggleHelp);
        assert_eq!(app.window.render(&app.pagination), page);
    }

    #[test]
    fn binary_file_shows_error_page() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("image.bin");
        fs::write(&path, [0xffu8, 0xd8, 0xff, 0xe0]).unwrap();

        let mut app = app_in(&dir);
        open_and_wait(&mut app, &path);
        assert!(matches!(app.window.view(), ViewState::LoadError(_)));
        assert!(matches!(
            app.ui_logger.message,
            Some((_, UiLogLevel::Error))
        ));
    }

    #[test]
    fn malformed_settings_are_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "[1, 2").unwrap();

        let app = app_in(&dir);
        assert_eq!(app.settings, Settings::default());
        let Some((msg, level)) = &app.ui_logger.message else {
            panic!("no warning shown");
        };
        assert_eq!(*level, UiLogLevel::Warning);
        assert!(msg.contains(SETTINGS_FILE));
        assert!(app.ui_logger.time_left(Instant::now()).unwrap() > LOG_TIMEOUT);
    }

    #[test]
    fn resize_waits_for_the_window_then_repaginates() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.apply(Action::ShrinkWindow);
        assert_eq!((app.settings.width, app.settings.height), (580, 380));
        let target = app.settings.size();

        app.relayout(Some(Vec2::new(600.0, 400.0)), 15);
        assert_eq!(app.pagination.lines_per_page(), DEFAULT_LINES_PER_PAGE);

        app.relayout(Some(target), 15);
        assert_eq!(app.pagination.lines_per_page(), 15);
        assert!(app.pending_relayout.is_none());
    }
}
