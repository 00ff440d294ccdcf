use chaincheck_logging::{app_debug, app_info};

use crate::{content, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModeSelected(mode) => {
            if state.input_mut().set_mode(mode) {
                app_debug!("Input mode switched to {}", mode);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::TextChanged(text) => {
            if state.input_mut().set_text(text) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::UrlChanged(url) => {
            // Stored verbatim; the URL is never parsed or fetched.
            if state.input_mut().set_url(url) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ChooseFileClicked => {
            if state.file_picker_open() {
                Vec::new()
            } else {
                state.set_file_picker_open(true);
                vec![Effect::OpenFilePicker {
                    accept: content::FILE_ACCEPT_HINT,
                }]
            }
        }
        Msg::FileSelected(file) => {
            app_info!("File selected name={} size={}", file.name, file.size());
            state.set_file_picker_open(false);
            state.input_mut().set_file(file);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FilePickerCancelled => {
            app_debug!("File picker closed without a selection");
            state.set_file_picker_open(false);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            if state.is_analyzing() {
                app_debug!("Analyze ignored: already running");
                Vec::new()
            } else {
                let ticket = state.begin_analysis();
                let delay = state.analysis_delay();
                app_info!(
                    "Analysis started ticket={} mode={} delay_ms={}",
                    ticket,
                    state.current_mode(),
                    delay.as_millis()
                );
                vec![Effect::ScheduleAnalysisReset { ticket, delay }]
            }
        }
        Msg::AnalysisDelayElapsed { ticket } => {
            if state.finish_analysis(ticket) {
                app_info!("Analysis finished ticket={}", ticket);
            } else {
                app_debug!(
                    "Ignoring stale analysis reset ticket={} pending={:?}",
                    ticket,
                    state.pending_ticket()
                );
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
