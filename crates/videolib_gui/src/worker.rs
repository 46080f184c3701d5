//! Controller thread.
//!
//! # Responsibility
//! - Own the SQLite connection and the `InventoryController`.
//! - Apply window requests one at a time and post a state snapshot after each.
//!
//! # Invariants
//! - The window never touches the database directly.
//! - The thread exits once the window drops its request sender.

use crate::bridge::{AppMessage, ChannelPrompt, DialogReply, UiRequest, Waker};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use videolib_core::db::open_db;
use videolib_core::{
    Command, InventoryController, Notice, Prompt, SqliteVideoRepository, VideoRepository,
};

/// Window side of the controller thread.
pub struct WorkerHandle {
    pub requests: mpsc::Sender<UiRequest>,
    pub replies: mpsc::Sender<DialogReply>,
    pub messages: mpsc::Receiver<AppMessage>,
}

/// Starts the controller thread over the database at `db_path`.
pub fn spawn_worker(db_path: PathBuf, wake: Waker) -> WorkerHandle {
    let (request_tx, request_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    let (message_tx, message_rx) = mpsc::channel();

    thread::spawn(move || {
        let prompt = ChannelPrompt::new(message_tx, reply_rx, wake);
        run_worker(&db_path, prompt, request_rx);
    });

    WorkerHandle {
        requests: request_tx,
        replies: reply_tx,
        messages: message_rx,
    }
}

fn run_worker(db_path: &Path, prompt: ChannelPrompt, requests: mpsc::Receiver<UiRequest>) {
    let conn = match open_db(db_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=worker_start module=gui status=error error={err}");
            prompt.post(AppMessage::Fatal(format!(
                "cannot open database `{}`: {err}",
                db_path.display()
            )));
            return;
        }
    };

    let mut controller = InventoryController::new(SqliteVideoRepository::new(&conn), prompt);
    // A failed first load is shown as a dialog; the window stays usable.
    let _ = controller.dispatch(Command::Refresh);

    info!("event=worker_start module=gui status=ok");
    post_state(&controller);

    while let Ok(request) = requests.recv() {
        let finished = matches!(request, UiRequest::Run(_));
        apply_request(&mut controller, request);
        post_state(&controller);
        if finished {
            controller.prompt().post(AppMessage::CommandFinished);
        }
    }

    info!("event=worker_stop module=gui status=ok");
}

/// Applies one window request; failures are shown through the prompt.
pub fn apply_request<R, P>(controller: &mut InventoryController<R, P>, request: UiRequest)
where
    R: VideoRepository,
    P: Prompt,
{
    let result = match request {
        UiRequest::SetField(field, value) => controller.set_field(field, value),
        UiRequest::SetStatus(status) => {
            controller.set_status(status);
            Ok(())
        }
        UiRequest::Select(index) => controller.select(index),
        // `dispatch` reports its own failures.
        UiRequest::Run(command) => {
            let _ = controller.dispatch(command);
            Ok(())
        }
    };

    if let Err(err) = result {
        controller
            .prompt_mut()
            .notify(Notice::error(err.title(), err.to_string()));
    }
}

fn post_state<R: VideoRepository>(controller: &InventoryController<R, ChannelPrompt>) {
    controller
        .prompt()
        .post(AppMessage::State(controller.state().clone()));
}
