pub mod left;

use crate::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Frame of every private screen.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |  title                       |
/// |  (Left)   |  routed content              |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let location = use_location();
    let title = move || {
        location
            .pathname
            .with(|p| AppRoute::from_path(p).map(AppRoute::label))
            .unwrap_or_default()
    };

    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside data-zone="left" class="left app-sidebar">
                    <left::Sidebar />
                </aside>

                <main class="app-main">
                    <div class="app-main__header">{title}</div>
                    <div class="app-main__content">
                        {children()}
                    </div>
                </main>
            </div>
        </div>
    }
}
