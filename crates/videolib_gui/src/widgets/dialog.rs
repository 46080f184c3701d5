use crate::bridge::{DialogReply, DialogRequest};
use crate::state::UiModel;
use videolib_core::NoticeLevel;

/// Render the pending modal dialog, if any, and return the user's answer.
pub fn show(ctx: &egui::Context, model: &mut UiModel) -> Option<DialogReply> {
    let dialog = model.dialog.as_mut()?;
    let mut answer: Option<bool> = None;

    egui::Window::new(title(&dialog.request))
        .id(egui::Id::new("videolib_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| match &dialog.request {
            DialogRequest::Confirm { question, .. } => {
                ui.label(question);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("No").clicked() {
                        answer = Some(false);
                    }
                });
            }
            DialogRequest::AskText { prompt, .. } => {
                ui.label(prompt);
                let response = ui.text_edit_singleline(&mut dialog.text);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    answer = Some(true);
                }
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            }
            DialogRequest::Notice(notice) => {
                match notice.level {
                    NoticeLevel::Info => ui.label(&notice.message),
                    NoticeLevel::Error => {
                        ui.colored_label(ui.visuals().error_fg_color, &notice.message)
                    }
                };
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    answer = Some(true);
                }
            }
        });

    answer.and_then(|accepted| model.answer_dialog(accepted))
}

fn title(request: &DialogRequest) -> &str {
    match request {
        DialogRequest::Confirm { title, .. } | DialogRequest::AskText { title, .. } => title,
        DialogRequest::Notice(notice) => &notice.title,
    }
}
