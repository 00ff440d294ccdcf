use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chaincheck_core::{AnalysisTicket, Effect, Msg, SelectedFile};
use chaincheck_logging::{app_debug, app_error, app_warn};
use chrono::Utc;
use rfd::FileDialog;
use thiserror::Error;

/// Wakes the UI so it drains the message channel.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub trait FilePicker {
    /// Blocks until the user picks a file or closes the dialog.
    fn pick(&self, accept: &[&str]) -> Option<PathBuf>;
}

/// Native dialog. Runs on the UI thread; macOS requires it there.
pub struct NativeFilePicker;

impl FilePicker for NativeFilePicker {
    fn pick(&self, accept: &[&str]) -> Option<PathBuf> {
        // The filter is advisory; "All files" keeps every file selectable.
        FileDialog::new()
            .set_title("Choose a file to analyze")
            .add_filter("Images, PDFs, text and documents", accept)
            .add_filter("All files", &["*"])
            .pick_file()
    }
}

#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("{0:?} has no file name")]
    NoFileName(PathBuf),
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads a chosen file as-is. No size or type checks.
pub fn read_selected_file(path: &Path) -> Result<SelectedFile, FileReadError> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| FileReadError::NoFileName(path.to_path_buf()))?;
    let bytes = fs::read(path).map_err(|source| FileReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SelectedFile::new(name, bytes))
}

pub struct EffectRunner {
    msg_tx: mpsc::Sender<Msg>,
    repaint: RepaintHook,
    picker: Box<dyn FilePicker>,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        repaint: RepaintHook,
        picker: Box<dyn FilePicker>,
    ) -> Self {
        Self {
            msg_tx,
            repaint,
            picker,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::OpenFilePicker { accept } => self.pick_file(accept),
                Effect::ScheduleAnalysisReset { ticket, delay } => {
                    self.schedule_reset(ticket, delay)
                }
            }
        }
    }

    fn pick_file(&self, accept: &[&str]) {
        let msg = match self.picker.pick(accept) {
            Some(path) => match read_selected_file(&path) {
                Ok(file) => Msg::FileSelected(file),
                Err(err) => {
                    app_warn!("Ignoring chosen file: {}", err);
                    Msg::FilePickerCancelled
                }
            },
            None => Msg::FilePickerCancelled,
        };
        self.send(msg);
    }

    fn schedule_reset(&self, ticket: AnalysisTicket, delay: Duration) {
        app_debug!(
            "Scheduling analysis reset ticket={} delay_ms={} started={}",
            ticket,
            delay.as_millis(),
            Utc::now().to_rfc3339()
        );
        let msg_tx = self.msg_tx.clone();
        let repaint = Arc::clone(&self.repaint);
        let spawned = thread::Builder::new()
            .name(format!("analysis-reset-{ticket}"))
            .spawn(move || {
                thread::sleep(delay);
                if msg_tx.send(Msg::AnalysisDelayElapsed { ticket }).is_ok() {
                    repaint();
                }
            });
        if let Err(err) = spawned {
            // Without the timer the busy state would never clear.
            app_error!("Could not start reset timer, resetting now: {}", err);
            self.send(Msg::AnalysisDelayElapsed { ticket });
        }
    }

    fn send(&self, msg: Msg) {
        if self.msg_tx.send(msg).is_ok() {
            (self.repaint)();
        } else {
            app_warn!("UI channel closed; dropping message");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;
    use tempfile::TempDir;

    struct StubPicker(Option<PathBuf>);

    impl FilePicker for StubPicker {
        fn pick(&self, _accept: &[&str]) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn runner(picked: Option<PathBuf>) -> (EffectRunner, mpsc::Receiver<Msg>, Arc<AtomicUsize>) {
        chaincheck_logging::initialize_for_tests();
        let (tx, rx) = mpsc::channel();
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&repaints);
        let hook: RepaintHook = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (
            EffectRunner::new(tx, hook, Box::new(StubPicker(picked))),
            rx,
            repaints,
        )
    }

    #[test]
    fn reset_arrives_after_delay() {
        let (runner, rx, repaints) = runner(None);
        runner.run(vec![Effect::ScheduleAnalysisReset {
            ticket: 7,
            delay: Duration::from_millis(20),
        }]);

        assert!(rx.try_recv().is_err());
        let msg = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(msg, Msg::AnalysisDelayElapsed { ticket: 7 });

        // The repaint follows the send on the timer thread.
        let deadline = Instant::now() + Duration::from_secs(5);
        while repaints.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn picked_file_is_read_whole() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("claim.txt");
        fs::write(&path, "free airdrop, send seed phrase").unwrap();

        let (runner, rx, repaints) = runner(Some(path));
        runner.run(vec![Effect::OpenFilePicker { accept: &["txt"] }]);

        let msg = rx.try_recv().unwrap();
        assert_eq!(
            msg,
            Msg::FileSelected(SelectedFile::new(
                "claim.txt",
                b"free airdrop, send seed phrase".to_vec()
            ))
        );
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn closed_dialog_reports_cancel() {
        let (runner, rx, _) = runner(None);
        runner.run(vec![Effect::OpenFilePicker { accept: &["pdf"] }]);

        assert_eq!(rx.try_recv().unwrap(), Msg::FilePickerCancelled);
    }

    #[test]
    fn unreadable_pick_reports_cancel() {
        let temp = TempDir::new().unwrap();
        let (runner, rx, _) = runner(Some(temp.path().join("gone.pdf")));
        runner.run(vec![Effect::OpenFilePicker { accept: &["pdf"] }]);

        assert_eq!(rx.try_recv().unwrap(), Msg::FilePickerCancelled);
    }

    #[test]
    fn read_selected_file_reports_missing_path() {
        let temp = TempDir::new().unwrap();
        let err = read_selected_file(&temp.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, FileReadError::Io { .. }));
    }

    #[test]
    fn read_selected_file_accepts_empty_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.docx");
        fs::write(&path, b"").unwrap();

        let file = read_selected_file(&path).unwrap();
        assert_eq!(file.name, "empty.docx");
        assert_eq!(file.size(), 0);
    }
}
