mod explanation_vm;
mod markdown_vm;
mod module_vm;
mod time_fmt;
mod timer_vm;

pub use explanation_vm::{ExplanationPanelVm, map_explanation_panel, panel_heading};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use module_vm::{
    ModuleCardVm, ModuleDetailVm, StudentSummaryVm, TopicRowVm, YearTabVm, map_module_cards,
    map_module_detail, map_student_summary, map_year_tabs,
};
pub use time_fmt::format_day;
pub use timer_vm::TimerVm;
