use crate::{AnalysisStatus, InputMode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: InputMode,
    pub text: String,
    pub url: String,
    /// Chosen file name, or the placeholder when nothing was chosen.
    pub file_label: String,
    pub file_size: Option<usize>,
    pub status: AnalysisStatus,
    pub analyze_button: AnalyzeButtonView,
    pub show_scanning_banner: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalyzeButtonView {
    pub label: &'static str,
    pub enabled: bool,
    /// Draw the spinner next to the label.
    pub busy: bool,
}
