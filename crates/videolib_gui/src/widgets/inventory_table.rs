use egui_extras::{Column, TableBuilder};

use crate::bridge::UiRequest;
use crate::state::UiModel;
use videolib_core::Command;

/// Render the five-column inventory list.
///
/// Click selects a row; double-click also loads it into the form.
pub fn show(ui: &mut egui::Ui, model: &mut UiModel, outbox: &mut Vec<UiRequest>) {
    let available_height = ui.available_height();
    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    let rows = &model.state.rows;
    let selected = model.state.selected;
    let mut clicked: Option<(usize, bool)> = None;

    egui::ScrollArea::horizontal().show(ui, |ui| {
        let table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(200.0).at_least(80.0)) // Video Name
            .column(Column::initial(100.0).at_least(60.0)) // Video ID
            .column(Column::initial(160.0).at_least(80.0)) // Director
            .column(Column::initial(130.0).at_least(80.0)) // Status
            .column(Column::initial(140.0).at_least(80.0)) // Issuer
            .min_scrolled_height(0.0)
            .max_scroll_height(available_height);

        table
            .header(20.0, |mut header| {
                for title in [
                    "Video Name",
                    "Video ID",
                    "Director",
                    "Status of the Video",
                    "Card ID of the Issuer",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, rows.len(), |mut row| {
                    let index = row.index();
                    let record = &rows[index];
                    row.set_selected(selected == Some(index));

                    for text in [
                        record.video_name.as_str(),
                        record.video_id.as_str(),
                        record.director_name.as_str(),
                        record.status.as_str(),
                        record.issuer_card_id.as_str(),
                    ] {
                        row.col(|ui| {
                            let response =
                                ui.add(egui::Label::new(text).sense(egui::Sense::click()));
                            if response.double_clicked() {
                                clicked = Some((index, true));
                            } else if response.clicked() {
                                clicked = Some((index, false));
                            }
                        });
                    }
                });
            });
    });

    if let Some((index, load)) = clicked {
        outbox.extend(model.select_row(index));
        if load {
            outbox.extend(model.run(Command::View));
        }
    }
}
