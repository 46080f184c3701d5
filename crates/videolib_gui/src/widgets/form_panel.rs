use crate::bridge::UiRequest;
use crate::state::UiModel;
use crate::widgets::command_button;
use videolib_core::{Command, FormField, FormState, VideoStatus};

/// Render the record form with its add/update/clear controls.
pub fn show(ui: &mut egui::Ui, model: &mut UiModel, outbox: &mut Vec<UiRequest>) {
    let editing = model.is_editing();

    ui.add_space(8.0);
    egui::Grid::new("video_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            text_row(ui, model, outbox, "Video Name", FormField::VideoName, true);
            // The id keys the update, so it is frozen while editing.
            text_row(ui, model, outbox, "Video ID", FormField::VideoId, !editing);
            text_row(ui, model, outbox, "Director Name", FormField::DirectorName, true);

            ui.label("Status");
            let mut status = model.form.status;
            egui::ComboBox::from_id_salt("video_status")
                .selected_text(status.as_str())
                .show_ui(ui, |ui| {
                    for option in [VideoStatus::Available, VideoStatus::Issued] {
                        ui.selectable_value(&mut status, option, option.as_str());
                    }
                });
            ui.end_row();
            outbox.extend(model.pick_status(status));

            ui.label("Issuer Card ID");
            ui.label(model.issuer_card_label());
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if editing {
            command_button(ui, model, outbox, "Update Record", Command::ConfirmUpdate);
            command_button(ui, model, outbox, "Cancel", Command::CancelUpdate);
        } else {
            command_button(ui, model, outbox, "Add new record", Command::Add);
        }
        command_button(ui, model, outbox, "Clear fields", Command::ClearFields);
    });
}

fn text_row(
    ui: &mut egui::Ui,
    model: &mut UiModel,
    outbox: &mut Vec<UiRequest>,
    label: &str,
    field: FormField,
    enabled: bool,
) {
    ui.label(label);
    let mut value = field_value(&model.form, field).to_string();
    let response = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut value).desired_width(200.0),
    );
    if response.changed() {
        outbox.extend(model.edit_field(field, value));
    }
    ui.end_row();
}

fn field_value(form: &FormState, field: FormField) -> &str {
    match field {
        FormField::VideoName => &form.video_name,
        FormField::VideoId => &form.video_id,
        FormField::DirectorName => &form.director_name,
    }
}
