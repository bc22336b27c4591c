use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::{
    DashboardView, FastTrackTip, FocusTimerPanel, ModuleView, PageHeader, Sidebar,
    use_progress_provider,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/modules/:module_id", ModuleView)] Module { module_id: String },
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    use_progress_provider(ctx.progress());

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                PageHeader {}
                div { class: "content-grid",
                    section { class: "content-main",
                        Outlet::<Route> {}
                    }
                    aside { class: "content-aside",
                        FocusTimerPanel {}
                        FastTrackTip {}
                    }
                }
            }
        }
    }
}
