use std::future::Future;
use std::sync::Arc;

use dioxus::prelude::*;
use pathway_core::model::{ModuleId, ProgressRecord};
use services::ProgressService;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
}

/// The student's progress record, shared by every view under the layout.
///
/// All changes go through `ProgressService` one at a time: while a write is
/// in flight further changes are ignored and the controls are disabled.
#[derive(Clone, Copy, PartialEq)]
pub struct ProgressState {
    record: Signal<ViewState<ProgressRecord>>,
    save_state: Signal<SaveState>,
}

impl ProgressState {
    /// Reactive snapshot of the record.
    #[must_use]
    pub fn view(&self) -> ViewState<ProgressRecord> {
        self.record.read().clone()
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        *self.save_state.read() == SaveState::Saving
    }

    pub fn toggle_topic(self, service: Arc<ProgressService>, topic: String) {
        self.apply(move |current| async move { service.toggle_topic(&current, &topic).await });
    }

    pub fn select_module(self, service: Arc<ProgressService>, id: ModuleId) {
        self.apply(move |current| async move { service.select_module(&current, &id).await });
    }

    fn apply<F, Fut>(self, change: F)
    where
        F: FnOnce(ProgressRecord) -> Fut,
        Fut: Future<Output = ProgressRecord> + 'static,
    {
        if *self.save_state.peek() == SaveState::Saving {
            debug!("progress write in flight, change ignored");
            return;
        }
        let ViewState::Ready(current) = self.record.peek().clone() else {
            return;
        };

        let mut record = self.record;
        let mut save_state = self.save_state;
        save_state.set(SaveState::Saving);
        let pending = change(current);
        spawn(async move {
            let next = pending.await;
            record.set(ViewState::Ready(next));
            save_state.set(SaveState::Idle);
        });
    }
}

/// Create the shared progress state for this subtree and start loading it.
pub fn use_progress_provider(service: Arc<ProgressService>) -> ProgressState {
    let state = use_context_provider(|| ProgressState {
        record: Signal::new(ViewState::Loading),
        save_state: Signal::new(SaveState::Idle),
    });
    use_hook(move || {
        let mut record = state.record;
        spawn(async move {
            let loaded = service.load().await;
            record.set(ViewState::Ready(loaded));
        });
    });
    state
}

#[must_use]
pub fn use_progress() -> ProgressState {
    use_context::<ProgressState>()
}
