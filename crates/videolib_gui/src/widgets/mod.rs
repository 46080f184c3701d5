pub mod dialog;
pub mod form_panel;
pub mod inventory_table;

use crate::bridge::UiRequest;
use crate::state::UiModel;
use videolib_core::Command;

/// Button that runs `command`, greyed out when the current mode forbids it.
pub fn command_button(
    ui: &mut egui::Ui,
    model: &mut UiModel,
    outbox: &mut Vec<UiRequest>,
    label: &str,
    command: Command,
) {
    if ui
        .add_enabled(model.command_enabled(command), egui::Button::new(label))
        .clicked()
    {
        outbox.extend(model.run(command));
    }
}
