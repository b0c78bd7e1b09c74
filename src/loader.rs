//! Background file loading and the handoff queue back to the UI thread.

use crate::prelude::*;

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Message posted by a worker when it finishes.
#[derive(Debug)]
pub enum LoadEvent {
    Ready {
        document: Document,
        resume_offset: usize,
    },
    Failed {
        path: PathBuf,
        error: AppError,
    },
}

/// Spawns one worker thread per open and collects their results.
///
/// Loads are never cancelled; results are handed out in the order they
/// arrive, so the last one to finish is the one left on screen.
pub struct FileLoader {
    sender: Sender<LoadEvent>,
    receiver: Receiver<LoadEvent>,
    waker: Option<egui::Context>,
}

impl Default for FileLoader {
    fn default() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            waker: None,
        }
    }
}

impl FileLoader {
    /// A loader that also asks `ctx` for a repaint after each post.
    pub fn with_waker(ctx: egui::Context) -> Self {
        Self {
            waker: Some(ctx),
            ..Self::default()
        }
    }

    /// Read `path` on a new thread.
    pub fn open(&self, path: PathBuf, resume_offset: usize) -> JoinHandle<()> {
        info!("Opening {} at line {}", path.display(), resume_offset);
        let sender = self.sender.clone();
        let waker = self.waker.clone();
        thread::spawn(move || {
            let event = match Document::read(&path) {
                Ok(document) => {
                    if document.is_empty() {
                        info!("{} is empty", path.display());
                    } else {
                        debug!("Read {} lines from {}", document.len(), path.display());
                    }
                    LoadEvent::Ready {
                        document,
                        resume_offset,
                    }
                }
                Err(error) => {
                    warn!("Failed to read {}: {}", path.display(), error);
                    LoadEvent::Failed { path, error }
                }
            };
            if sender.send(event).is_err() {
                debug!("Viewer closed before load finished");
                return;
            }
            if let Some(ctx) = waker {
                ctx.request_repaint();
            }
        })
    }

    /// Everything posted since the last poll, oldest first. Never blocks.
    pub fn poll(&self) -> Vec<LoadEvent> {
        self.receiver.try_iter().collect()
    }
}
