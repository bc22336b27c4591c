mod dashboard;
mod focus_timer;
mod module_detail;
mod sidebar;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::{DashboardView, FastTrackTip, ModuleView, PageHeader};
pub use focus_timer::{FocusTimerCard, FocusTimerControls, FocusTimerPanel, use_focus_timer};
pub use module_detail::{ModuleDetail, ModuleNotFound};
pub use sidebar::Sidebar;
pub use state::{ProgressState, SaveState, ViewState, use_progress, use_progress_provider};
