use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use pathway_core::model::{Catalog, ProgressRecord};
use pathway_core::time::fixed_clock;
use services::{
    ExplanationModels, ExplanationService, GenerationError, GenerationRequest, ProgressService,
    TextGenerator,
};
use storage::repository::{InMemoryRepository, ProgressRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{
    DashboardView, FocusTimerCard, FocusTimerControls, ModuleView, PageHeader, Sidebar,
    use_focus_timer, use_progress_provider,
};

struct CannedGenerator;

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Ok("**THE HANDS-ON TECHNIQUE**: line up the axis.".to_owned())
    }
}

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
    progress: Arc<ProgressService>,
    explanations: Arc<ExplanationService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn explanations(&self) -> Arc<ExplanationService> {
        Arc::clone(&self.explanations)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Sidebar,
    Header,
    Dashboard,
    Module(String),
    FocusTimer,
}

/// Hands the focus timer's controls back to the test.
#[derive(Clone, Default)]
pub struct TimerHandle(Rc<RefCell<Option<FocusTimerControls>>>);

impl TimerHandle {
    pub fn controls(&self) -> FocusTimerControls {
        (*self.0.borrow()).expect("timer registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    timer: TimerHandle,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_progress_provider(ctx.progress());
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.timer.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Sidebar => rsx! { Sidebar {} },
        ViewKind::Header => rsx! { PageHeader {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Module(module_id) => rsx! { ModuleView { module_id } },
        ViewKind::FocusTimer => rsx! { FocusTimerHarness {} },
    }
}

#[component]
fn FocusTimerHarness() -> Element {
    let ctx = use_context::<crate::context::AppContext>();
    let handle = use_context::<TimerHandle>();
    let controls = use_focus_timer(ctx.timer_durations());
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handle.0.borrow_mut() = Some(controls);
    }
    rsx! { FocusTimerCard { controls } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
    pub timer: TimerHandle,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Build, then let storage loads and follow-up writes finish.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    /// Fire a button action inside the dom's runtime and let it settle.
    pub async fn press(&mut self, action: Callback<()>) {
        self.dom.in_runtime(|| action.call(()));
        self.advance(0).await;
    }

    /// Let `secs` of (paused) tokio time pass, then run whatever woke up.
    pub async fn advance(&mut self, secs: u64) {
        tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub async fn stored_record(&self) -> Option<ProgressRecord> {
        self.repo.load_progress().await.expect("load stored progress")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_record(view, None).await
}

/// `record` is written to storage before the view loads it.
pub async fn setup_view_harness_with_record(
    view: ViewKind,
    record: Option<ProgressRecord>,
) -> ViewHarness {
    let repo = InMemoryRepository::new();
    if let Some(record) = record.as_ref() {
        repo.save_progress(record).await.expect("seed progress");
    }

    let storage = Storage::from_in_memory(repo.clone());
    let catalog = Arc::new(Catalog::builtin());
    let progress = Arc::new(ProgressService::new(
        fixed_clock(),
        Arc::clone(&catalog),
        Arc::clone(&storage.progress),
    ));
    let explanations = Arc::new(ExplanationService::new(
        Arc::new(CannedGenerator),
        ExplanationModels::default(),
    ));

    let app = Arc::new(TestApp {
        catalog,
        progress,
        explanations,
    });
    let timer = TimerHandle::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            timer: timer.clone(),
        },
    );

    ViewHarness { dom, repo, timer }
}
