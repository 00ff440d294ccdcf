use crate::{AnalysisTicket, InputMode, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched input tab.
    ModeSelected(InputMode),
    /// User edited the free-text box.
    TextChanged(String),
    /// User edited the URL box.
    UrlChanged(String),
    /// User clicked the file drop zone.
    ChooseFileClicked,
    /// A file was picked or dropped onto the window.
    FileSelected(SelectedFile),
    /// The picker closed without a file.
    FilePickerCancelled,
    /// User clicked Analyze.
    AnalyzeClicked,
    /// The fixed analysis delay for `ticket` has passed.
    AnalysisDelayElapsed { ticket: AnalysisTicket },
    /// UI/render tick.
    Tick,
    /// Fallback for decorative controls.
    NoOp,
}
