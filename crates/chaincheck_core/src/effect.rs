use std::time::Duration;

use crate::AnalysisTicket;

/// Side effects requested by `update`; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the native file picker. The filter is a hint only.
    OpenFilePicker {
        accept: &'static [&'static str],
    },
    /// Report `Msg::AnalysisDelayElapsed { ticket }` once `delay` has passed.
    ScheduleAnalysisReset {
        ticket: AnalysisTicket,
        delay: Duration,
    },
}
