use std::sync::{mpsc, Arc};

use anyhow::Context as _;
use chaincheck_core::{content, update, AppState, AppViewModel, InputMode, Msg, SelectedFile};
use chaincheck_logging::{app_info, app_warn};
use eframe::egui;

use super::config::{self, AppConfig};
use super::effects::{read_selected_file, EffectRunner, NativeFilePicker, RepaintHook};
use super::logging;
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let config_dir = std::env::current_dir().context("resolve working directory")?;
    let loaded = config::load(&config_dir);
    let startup = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    logging::initialize(startup.log_destination, startup.level_filter());
    let config = config::settle(&config_dir, loaded);

    app_info!(
        "Starting {} analysis_delay_ms={}",
        content::BRAND_NAME,
        config.analysis_delay_ms
    );

    let viewport = egui::ViewportBuilder::default()
        .with_title(content::BRAND_NAME)
        .with_inner_size(config.window_size())
        .with_min_inner_size(ui::constants::MIN_WINDOW_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        content::BRAND_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(ChainCheckApp::new(cc, &config)))),
    )
    .map_err(|err| anyhow::anyhow!("window event loop failed: {err}"))
}

struct ChainCheckApp {
    state: AppState,
    view: AppViewModel,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
}

impl ChainCheckApp {
    fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        cc.egui_ctx.set_visuals(ui::constants::visuals());

        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let repaint_ctx = cc.egui_ctx.clone();
        let repaint: RepaintHook = Arc::new(move || repaint_ctx.request_repaint());

        let state = AppState::with_analysis_delay(config.analysis_delay());
        let view = state.view();
        Self {
            state,
            view,
            msg_rx,
            effects: EffectRunner::new(msg_tx, repaint, Box::new(NativeFilePicker)),
        }
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;
        self.effects.run(effects);
    }

    /// Files dropped on the window count as a pick while the file tab is open.
    fn take_dropped_file(&self, ctx: &egui::Context) -> Option<SelectedFile> {
        if self.view.mode != InputMode::File {
            return None;
        }
        let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned())?;
        if let Some(bytes) = dropped.bytes {
            return Some(SelectedFile::new(dropped.name, bytes.to_vec()));
        }
        let path = dropped.path?;
        match read_selected_file(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                app_warn!("Ignoring dropped file: {}", err);
                None
            }
        }
    }
}

impl eframe::App for ChainCheckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages();

        if let Some(file) = self.take_dropped_file(ctx) {
            self.dispatch_msg(Msg::FileSelected(file));
        }

        for msg in ui::render::render(ctx, &self.view) {
            self.dispatch_msg(msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn app_in_mode(mode: InputMode) -> ChainCheckApp {
        chaincheck_logging::initialize_for_tests();
        let (msg_tx, msg_rx) = mpsc::channel();
        let repaint: RepaintHook = Arc::new(|| {});
        let (mut state, _) = update(AppState::new(), Msg::ModeSelected(mode));
        state.consume_dirty();
        let view = state.view();
        ChainCheckApp {
            state,
            view,
            msg_rx,
            effects: EffectRunner::new(msg_tx, repaint, Box::new(NativeFilePicker)),
        }
    }

    fn drop_into(app: &ChainCheckApp, dropped: Vec<egui::DroppedFile>) -> Option<SelectedFile> {
        let ctx = egui::Context::default();
        let raw = egui::RawInput {
            dropped_files: dropped,
            ..Default::default()
        };
        let mut taken = None;
        let _ = ctx.run(raw, |ctx| {
            taken = app.take_dropped_file(ctx);
        });
        taken
    }

    fn dropped_path(path: std::path::PathBuf) -> egui::DroppedFile {
        egui::DroppedFile {
            path: Some(path),
            ..Default::default()
        }
    }

    #[test]
    fn drop_is_ignored_outside_file_tab() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x.pdf");
        fs::write(&path, b"pdf").unwrap();

        for mode in [InputMode::Text, InputMode::Url] {
            let app = app_in_mode(mode);
            assert_eq!(drop_into(&app, vec![dropped_path(path.clone())]), None);
        }
    }

    #[test]
    fn drop_on_file_tab_reads_the_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x.pdf");
        fs::write(&path, b"pdf").unwrap();

        let app = app_in_mode(InputMode::File);
        assert_eq!(
            drop_into(&app, vec![dropped_path(path)]),
            Some(SelectedFile::new("x.pdf", b"pdf".to_vec()))
        );
    }

    #[test]
    fn only_the_first_dropped_file_counts() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first.txt");
        let second = temp.path().join("second.txt");
        fs::write(&first, b"1").unwrap();
        fs::write(&second, b"22").unwrap();

        let app = app_in_mode(InputMode::File);
        let taken = drop_into(&app, vec![dropped_path(first), dropped_path(second)]);
        assert_eq!(taken, Some(SelectedFile::new("first.txt", b"1".to_vec())));
    }

    #[test]
    fn dropped_bytes_are_used_without_a_path() {
        let app = app_in_mode(InputMode::File);
        let dropped = egui::DroppedFile {
            name: "paste.png".to_string(),
            bytes: Some(Arc::from(&b"\x89PNG"[..])),
            ..Default::default()
        };
        assert_eq!(
            drop_into(&app, vec![dropped]),
            Some(SelectedFile::new("paste.png", b"\x89PNG".to_vec()))
        );
    }

    #[test]
    fn unreadable_drop_is_skipped() {
        let temp = TempDir::new().unwrap();
        let app = app_in_mode(InputMode::File);
        let missing = dropped_path(temp.path().join("gone.pdf"));
        assert_eq!(drop_into(&app, vec![missing]), None);
    }

    #[test]
    fn no_drop_means_no_file() {
        let app = app_in_mode(InputMode::File);
        assert_eq!(drop_into(&app, Vec::new()), None);
    }
}
