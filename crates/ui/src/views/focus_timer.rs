use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use pathway_core::timer::{FocusTimer, TickOutcome, TimerDurations};
use tracing::info;

use crate::context::AppContext;
use crate::vm::TimerVm;

const QUICK_STRATEGIES: [&str; 3] = ["5-min Movement Break", "Drink Water", "Box Breathing"];

/// Timer state plus the two button actions.
#[derive(Clone, Copy, PartialEq)]
pub struct FocusTimerControls {
    pub timer: Signal<FocusTimer>,
    pub toggle: Callback<()>,
    pub reset: Callback<()>,
}

/// Own a focus timer and keep exactly one one-second tick armed while it runs.
pub fn use_focus_timer(durations: TimerDurations) -> FocusTimerControls {
    let mut timer = use_signal(move || FocusTimer::with_durations(durations));
    let tick_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    // Any change to the timer cancels the armed tick before a new one is
    // spawned, so a tick scheduled for an older state never lands.
    {
        let tick_task = Rc::clone(&tick_task);
        use_effect(move || {
            let current = *timer.read();
            if let Some(task) = tick_task.take() {
                task.cancel();
            }
            if !current.is_running() {
                return;
            }
            let task = spawn(async move {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let outcome = timer.write().tick();
                if let TickOutcome::Expired { next } = outcome {
                    info!(mode = %next, "focus phase finished");
                }
            });
            tick_task.set(Some(task));
        });
    }

    use_drop(move || {
        if let Some(task) = tick_task.take() {
            task.cancel();
        }
    });

    let toggle = use_callback(move |()| timer.write().toggle());
    let reset = use_callback(move |()| timer.write().reset());

    FocusTimerControls {
        timer,
        toggle,
        reset,
    }
}

#[component]
pub fn FocusTimerPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let controls = use_focus_timer(ctx.timer_durations());
    rsx! {
        FocusTimerCard { controls }
    }
}

#[component]
pub fn FocusTimerCard(controls: FocusTimerControls) -> Element {
    let vm = TimerVm::from(&*controls.timer.read());

    rsx! {
        section { class: "focus-timer",
            header { class: "focus-timer-head",
                h3 { "Focus Flow" }
                span { class: "{vm.mode_class}", "{vm.mode_label}" }
            }
            div { class: "focus-clock", "{vm.clock}" }
            div { class: "focus-controls",
                button {
                    class: if vm.is_running { "btn focus-toggle running" } else { "btn focus-toggle" },
                    onclick: move |_| controls.toggle.call(()),
                    "{vm.toggle_label}"
                }
                button {
                    class: "btn focus-reset",
                    onclick: move |_| controls.reset.call(()),
                    "Reset"
                }
            }
            div { class: "focus-strategies",
                h4 { "Quick ADHD Strategies" }
                ul {
                    for strategy in QUICK_STRATEGIES {
                        li { key: "{strategy}", "{strategy}" }
                    }
                }
            }
        }
    }
}
