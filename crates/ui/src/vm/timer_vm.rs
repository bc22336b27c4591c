use pathway_core::timer::{FocusTimer, TimerMode, format_clock};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub mode_label: String,
    pub mode_class: &'static str,
    pub clock: String,
    pub toggle_label: &'static str,
    pub is_running: bool,
}

impl From<&FocusTimer> for TimerVm {
    fn from(timer: &FocusTimer) -> Self {
        Self {
            mode_label: format!("{} Session", timer.mode()),
            mode_class: match timer.mode() {
                TimerMode::Work => "timer-mode work",
                TimerMode::Break => "timer-mode break",
            },
            clock: format_clock(timer.remaining_secs()),
            toggle_label: if timer.is_running() { "Pause" } else { "Start" },
            is_running: timer.is_running(),
        }
    }
}
