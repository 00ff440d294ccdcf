use std::time::Duration;

use crate::content;
use crate::input::{InputMode, InputSelection, SelectedFile};
use crate::view_model::{AnalyzeButtonView, AppViewModel};

/// Identifies one scheduled busy-state reset.
pub type AnalysisTicket = u64;

/// How long the busy state lasts when nothing overrides it.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: InputSelection,
    status: AnalysisStatus,
    pending_ticket: Option<AnalysisTicket>,
    next_ticket: AnalysisTicket,
    analysis_delay: Duration,
    file_picker_open: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: InputSelection::default(),
            status: AnalysisStatus::Idle,
            pending_ticket: None,
            next_ticket: 1,
            analysis_delay: DEFAULT_ANALYSIS_DELAY,
            file_picker_open: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analysis_delay(delay: Duration) -> Self {
        Self {
            analysis_delay: delay,
            ..Self::default()
        }
    }

    pub fn analysis_delay(&self) -> Duration {
        self.analysis_delay
    }

    pub fn input(&self) -> &InputSelection {
        &self.input
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    pub fn is_analyzing(&self) -> bool {
        self.status == AnalysisStatus::Running
    }

    pub fn pending_ticket(&self) -> Option<AnalysisTicket> {
        self.pending_ticket
    }

    pub fn view(&self) -> AppViewModel {
        let running = self.is_analyzing();
        let file = self.input.file();
        AppViewModel {
            mode: self.input.mode(),
            text: self.input.text().to_string(),
            url: self.input.url().to_string(),
            file_label: file
                .map(|f| f.name.clone())
                .unwrap_or_else(|| content::FILE_PLACEHOLDER.to_string()),
            file_size: file.map(SelectedFile::size),
            status: self.status,
            analyze_button: AnalyzeButtonView {
                label: if running {
                    content::ANALYZING_LABEL
                } else {
                    content::ANALYZE_LABEL
                },
                enabled: !running,
                busy: running,
            },
            show_scanning_banner: running,
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputSelection {
        &mut self.input
    }

    pub(crate) fn file_picker_open(&self) -> bool {
        self.file_picker_open
    }

    pub(crate) fn set_file_picker_open(&mut self, open: bool) {
        self.file_picker_open = open;
    }

    /// Moves idle -> running and returns the ticket the reset must carry.
    pub(crate) fn begin_analysis(&mut self) -> AnalysisTicket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.status = AnalysisStatus::Running;
        self.pending_ticket = Some(ticket);
        self.mark_dirty();
        ticket
    }

    /// Moves running -> idle if `ticket` is the pending one.
    pub(crate) fn finish_analysis(&mut self, ticket: AnalysisTicket) -> bool {
        if self.status != AnalysisStatus::Running || self.pending_ticket != Some(ticket) {
            return false;
        }
        self.status = AnalysisStatus::Idle;
        self.pending_ticket = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn current_mode(&self) -> InputMode {
        self.input.mode()
    }
}
