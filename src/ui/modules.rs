use crate::prelude::*;

pub fn ui_log_msg(ui: &mut Ui, msg: &str, kind: UiLogLevel, alpha: f32) {
    ui.add(
        egui::Label::new(RichText::new(msg).color(kind.color().gamma_multiply(alpha)))
            .selectable(false)
            .truncate(),
    );
}

/// Returns true when clicked.
pub fn ui_close_button(ui: &mut Ui, alpha: f32) -> bool {
    ui.add(
        egui::Button::new(RichText::new("X").color(Color32::WHITE.gamma_multiply(alpha)))
            .frame(false),
    )
    .on_hover_text("Close")
    .clicked()
}

/// OK / Cancel row. `Some(true)` on OK, `Some(false)` on Cancel.
pub fn ui_dialog_buttons(ui: &mut Ui) -> Option<bool> {
    ui.horizontal(|ui| {
        let ok = ui.button("OK").clicked();
        let cancel = ui.button("Cancel").clicked();
        if ok {
            Some(true)
        } else if cancel {
            Some(false)
        } else {
            None
        }
    })
    .inner
}
