use std::path::PathBuf;
use std::sync::Arc;

use log::warn;

use crate::bridge::{UiRequest, Waker};
use crate::state::UiModel;
use crate::widgets;
use crate::worker::{spawn_worker, WorkerHandle};
use videolib_core::Command;

/// Main window of the inventory.
pub struct VideoLibraryApp {
    model: UiModel,
    /// Channels to the thread that owns the database.
    worker: WorkerHandle,
}

impl VideoLibraryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, db_path: PathBuf) -> Self {
        let ctx = cc.egui_ctx.clone();
        let wake: Waker = Arc::new(move || ctx.request_repaint());
        Self {
            model: UiModel::default(),
            worker: spawn_worker(db_path, wake),
        }
    }

    /// Drain all pending messages from the controller thread.
    fn process_messages(&mut self) {
        while let Ok(message) = self.worker.messages.try_recv() {
            self.model.handle_message(message);
        }
    }

    fn forward(&self, requests: Vec<UiRequest>) {
        for request in requests {
            if self.worker.requests.send(request).is_err() {
                warn!("event=ui_request module=gui status=error error_code=worker_stopped");
            }
        }
    }
}

impl eframe::App for VideoLibraryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.heading("VIDEO LIBRARY MANAGEMENT SYSTEM");
            });
            ui.add_space(6.0);
        });

        if let Some(message) = self.model.fatal.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.colored_label(ui.visuals().error_fg_color, message);
            });
            return;
        }

        let interactive = self.model.is_interactive();
        let mut outbox = Vec::new();

        // Record form
        egui::SidePanel::left("video_form")
            .resizable(false)
            .exact_width(330.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(interactive, |ui| {
                    widgets::form_panel::show(ui, &mut self.model, &mut outbox);
                });
            });

        // Commands and inventory list
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                ui.horizontal(|ui| {
                    let model = &mut self.model;
                    widgets::command_button(ui, model, &mut outbox, "View record", Command::View);
                    widgets::command_button(
                        ui,
                        model,
                        &mut outbox,
                        "Update video details",
                        Command::BeginUpdate,
                    );
                    widgets::command_button(
                        ui,
                        model,
                        &mut outbox,
                        "Change Video Availability",
                        Command::ToggleAvailability,
                    );
                    ui.separator();
                    widgets::command_button(
                        ui,
                        model,
                        &mut outbox,
                        "Delete video record",
                        Command::DeleteSelected,
                    );
                    widgets::command_button(
                        ui,
                        model,
                        &mut outbox,
                        "Delete full inventory",
                        Command::DeleteAll,
                    );
                });

                ui.separator();
                widgets::inventory_table::show(ui, &mut self.model, &mut outbox);
            });
        });

        if let Some(reply) = widgets::dialog::show(ctx, &mut self.model) {
            if self.worker.replies.send(reply).is_err() {
                warn!("event=dialog_reply module=gui status=error error_code=worker_stopped");
            }
        }

        self.forward(outbox);
    }
}
