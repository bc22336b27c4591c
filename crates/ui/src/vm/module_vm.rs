use pathway_core::model::{
    Catalog, Difficulty, Module, ProgressRecord, catalog_progress, completed_module_ids,
    module_progress,
};

use crate::vm::time_fmt::format_day;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearTabVm {
    pub year: u8,
    pub label: String,
    pub is_selected: bool,
}

#[must_use]
pub fn map_year_tabs(catalog: &Catalog, selected_year: u8) -> Vec<YearTabVm> {
    catalog
        .years()
        .into_iter()
        .map(|year| YearTabVm {
            year,
            label: format!("Year {year}"),
            is_selected: year == selected_year,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCardVm {
    pub id: String,
    pub title: String,
    pub category: String,
    pub hours_label: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub is_active: bool,
    pub is_complete: bool,
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Low => "difficulty-low",
        Difficulty::Medium => "difficulty-medium",
        Difficulty::High => "difficulty-high",
    }
}

/// Sidebar cards for one year. The active card is the record's active
/// module, or the first catalog module when that id is unknown.
#[must_use]
pub fn map_module_cards(catalog: &Catalog, record: &ProgressRecord, year: u8) -> Vec<ModuleCardVm> {
    let active = catalog.resolve_active(record.active_module_id()).id();
    let completed = completed_module_ids(catalog, record);

    catalog
        .modules_for_year(year)
        .map(|module| ModuleCardVm {
            id: module.id().to_string(),
            title: module.title().to_owned(),
            category: module.category().to_owned(),
            hours_label: format!("{}h", module.estimated_hours()),
            difficulty_label: module.difficulty().as_str(),
            difficulty_class: difficulty_class(module.difficulty()),
            is_active: module.id() == active,
            is_complete: completed.contains(module.id()),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRowVm {
    pub name: String,
    pub is_done: bool,
    pub is_selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDetailVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub track_label: String,
    pub practical_goal: String,
    pub percent: u8,
    pub progress_label: String,
    pub is_complete: bool,
    pub topics: Vec<TopicRowVm>,
}

#[must_use]
pub fn map_module_detail(
    module: &Module,
    record: &ProgressRecord,
    selected_topic: Option<&str>,
) -> ModuleDetailVm {
    let progress = module_progress(module, record);
    let topics = module
        .topics()
        .iter()
        .map(|topic| TopicRowVm {
            name: topic.clone(),
            is_done: record.is_completed(topic),
            is_selected: selected_topic == Some(topic.as_str()),
        })
        .collect();

    ModuleDetailVm {
        id: module.id().to_string(),
        title: module.title().to_owned(),
        description: module.description().to_owned(),
        category: module.category().to_owned(),
        track_label: format!("Clinical Track: Year {}", module.year()),
        practical_goal: module.practical_goal().to_owned(),
        percent: progress.percent(),
        progress_label: format!("{} of {} skills", progress.done, progress.total),
        is_complete: progress.is_complete(),
        topics,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentSummaryVm {
    pub streak_label: String,
    pub last_active_label: String,
    pub overall_percent: u8,
    pub modules_label: String,
}

#[must_use]
pub fn map_student_summary(catalog: &Catalog, record: &ProgressRecord) -> StudentSummaryVm {
    let overall = catalog_progress(catalog, record);
    let done_modules = completed_module_ids(catalog, record).len();
    let streak_label = match record.daily_streak() {
        0 => "Start your intensive streak today".to_owned(),
        1 => "1 Day Intensive Streak".to_owned(),
        days => format!("{days} Day Intensive Streak"),
    };

    StudentSummaryVm {
        streak_label,
        last_active_label: format!("Last active {}", format_day(record.last_active())),
        overall_percent: overall.percent(),
        modules_label: format!("{done_modules} of {} modules complete", catalog.len()),
    }
}
