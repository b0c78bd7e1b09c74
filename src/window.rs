//! Window state: what is shown, colours, stacking and drag-to-move.

use crate::prelude::*;

/// What the text area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Help,
    Document,
    LoadError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Background,
    Foreground,
}

impl ColorTarget {
    pub fn title(&self) -> &'static str {
        match self {
            ColorTarget::Background => "Background colour",
            ColorTarget::Foreground => "Text colour",
        }
    }

    fn fallback(&self) -> &'static str {
        match self {
            ColorTarget::Background => DEFAULT_BG_COLOR,
            ColorTarget::Foreground => DEFAULT_FG_COLOR,
        }
    }
}

/// Click-drag relocation for a window without decorations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DragState {
    /// Pointer position inside the window when the drag began.
    offset: Option<Vec2>,
}

impl DragState {
    pub fn begin(&mut self, pointer_in_window: Pos2) {
        self.offset = Some(pointer_in_window.to_vec2());
    }

    /// New window origin for a pointer at `pointer_on_screen`.
    pub fn origin_for(&self, pointer_on_screen: Pos2) -> Option<Pos2> {
        self.offset.map(|offset| pointer_on_screen - offset)
    }

    pub fn end(&mut self) {
        self.offset = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.offset.is_some()
    }
}

/// Owns the view state and turns changes into viewport commands, which are
/// sent to egui once per frame.
pub struct WindowController {
    view: ViewState,
    topmost: bool,
    drag: DragState,
    background: Color32,
    foreground: Color32,
    commands: Vec<ViewportCommand>,
}

impl WindowController {
    pub fn new(settings: &Settings, logger: &mut UiLogger) -> Self {
        let mut controller = Self {
            view: ViewState::Help,
            topmost: false,
            drag: DragState::default(),
            background: Color32::BLACK,
            foreground: Color32::GREEN,
            commands: Vec::new(),
        };
        controller.set_color(ColorTarget::Background, &settings.bg_color, logger);
        controller.set_color(ColorTarget::Foreground, &settings.fg_color, logger);
        controller
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn show_document(&mut self) {
        self.view = ViewState::Document;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.view = ViewState::LoadError(message.into());
    }

    /// Flip between the help text and the document.
    pub fn toggle_help(&mut self) {
        self.view = match self.view {
            ViewState::Help => ViewState::Document,
            ViewState::Document | ViewState::LoadError(_) => ViewState::Help,
        };
    }

    /// Text for the whole display surface.
    pub fn render(&self, pagination: &Pagination) -> String {
        match &self.view {
            ViewState::Help => HELP_TEXT.to_string(),
            ViewState::Document => pagination.page_text(),
            ViewState::LoadError(message) => format!("Could not open file:\n{message}"),
        }
    }

    pub fn set_topmost(&mut self, topmost: bool) {
        self.topmost = topmost;
        let level = if topmost {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        };
        self.commands.push(ViewportCommand::WindowLevel(level));
    }

    pub fn toggle_topmost(&mut self) -> bool {
        self.set_topmost(!self.topmost);
        self.topmost
    }

    /// Parse and apply a colour string, keeping the default if it is bad.
    pub fn set_color(&mut self, target: ColorTarget, value: &str, logger: &mut UiLogger) {
        let color = parse_color_or(value, target.fallback(), logger);
        match target {
            ColorTarget::Background => self.background = color,
            ColorTarget::Foreground => self.foreground = color,
        }
    }

    pub fn color(&self, target: ColorTarget) -> Color32 {
        match target {
            ColorTarget::Background => self.background,
            ColorTarget::Foreground => self.foreground,
        }
    }

    /// Background as drawn at opacity `alpha`.
    pub fn background(&self, alpha: f32) -> Color32 {
        self.background.gamma_multiply(alpha)
    }

    /// Text colour as drawn at opacity `alpha`.
    pub fn foreground(&self, alpha: f32) -> Color32 {
        self.foreground.gamma_multiply(alpha)
    }

    pub fn resize(&mut self, size: Vec2) {
        self.commands.push(ViewportCommand::InnerSize(size));
    }

    pub fn begin_drag(&mut self, pointer_in_window: Pos2) {
        self.drag.begin(pointer_in_window);
    }

    pub fn continue_drag(&mut self, pointer_on_screen: Pos2) {
        if let Some(origin) = self.drag.origin_for(pointer_on_screen) {
            self.commands.push(ViewportCommand::OuterPosition(origin));
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn close(&mut self) {
        self.commands.push(ViewportCommand::Close);
    }

    /// Commands queued since the last call.
    pub fn take_commands(&mut self) -> Vec<ViewportCommand> {
        std::mem::take(&mut self.commands)
    }
}
