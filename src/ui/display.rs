use crate::prelude::*;
use crate::ui::modules;

impl ViewerApp {
    /// Draw the custom title bar: name, status line, close button. The
    /// whole bar is a drag handle for the window.
    pub fn display_title_bar(&mut self, ctx: &Context) {
        let alpha = self.settings.alpha;
        let frame = egui::Frame::default()
            .fill(Color32::BLACK.gamma_multiply(alpha))
            .inner_margin(4.0);

        egui::TopBottomPanel::top("title_bar")
            .exact_height(TITLE_BAR_HEIGHT)
            .frame(frame)
            .show(ctx, |ui| {
                let bar = ui.max_rect();
                let response = ui.interact(bar, ui.id().with("drag"), egui::Sense::click_and_drag());
                self.handle_drag(ctx, &response);

                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    if modules::ui_close_button(ui, alpha) {
                        self.close();
                    }
                    ui.with_layout(Layout::left_to_right(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Label::new(
                                RichText::new(NAME).color(Color32::WHITE.gamma_multiply(alpha)),
                            )
                            .selectable(false),
                        );
                        if let Some((msg, kind)) = &self.ui_logger.message {
                            ui.separator();
                            modules::ui_log_msg(ui, msg, *kind, alpha);
                        }
                    });
                });
            });
    }

    fn handle_drag(&mut self, ctx: &Context, response: &egui::Response) {
        if response.drag_started() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.window.begin_drag(pointer);
            }
        }
        if response.dragged() && self.window.is_dragging() {
            let origin = ctx.input(|i| i.viewport().inner_rect.map(|r| r.min));
            if let (Some(origin), Some(pointer)) = (origin, response.interact_pointer_pos()) {
                self.window.continue_drag(origin + pointer.to_vec2());
            }
        }
        if response.drag_stopped() {
            self.window.end_drag();
        }
    }

    /// Draw the text surface with the current page, help or error text.
    pub fn display_page(&mut self, ctx: &Context) {
        let alpha = self.settings.alpha;
        let frame = egui::Frame::default()
            .fill(self.window.background(alpha))
            .inner_margin(6.0);
        let inner_size = ctx.input(|i| i.viewport().inner_rect.map(|r| r.size()));

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            let row_height = ui.text_style_height(&TextStyle::Monospace);
            let capacity = (ui.available_height() / row_height).floor().max(1.0) as usize;
            self.relayout(inner_size, capacity);

            let text = self.window.render(&self.pagination);
            ui.add(
                egui::Label::new(
                    RichText::new(text)
                        .monospace()
                        .color(self.window.foreground(alpha)),
                )
                .wrap(),
            );
        });
    }

    /// Modal colour picker opened by Ctrl+B / Ctrl+F.
    pub fn display_color_picker(&mut self, ctx: &Context) {
        let Some((target, mut color)) = self.color_picker.take() else {
            return;
        };

        let mut decision = None;
        Window::new(target.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                );
                decision = modules::ui_dialog_buttons(ui);
            });
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            decision = Some(false);
        }

        match decision {
            Some(true) => self.confirm_color(target, color),
            Some(false) => debug!("{} unchanged", target.title()),
            None => self.color_picker = Some((target, color)),
        }
    }
}
