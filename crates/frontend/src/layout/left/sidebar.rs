//! Sidebar with the screen links, the signed-in user and the logout button

use crate::routes::AppRoute;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_session};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();

    let user_name = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_email = move || session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">"Fruit Checker"</div>

            <nav class="app-sidebar__nav">
                {AppRoute::NAV.into_iter().map(|route| {
                    view! {
                        <A href=route.path() exact=true attr:class="app-sidebar__item">
                            <div class="app-sidebar__item-content">
                                {icon(route.icon())}
                                <span>{route.label()}</span>
                            </div>
                        </A>
                    }
                }).collect_view()}
            </nav>

            <div class="app-sidebar__footer">
                <div class="app-sidebar__user">
                    {icon("user")}
                    <div class="app-sidebar__user-info">
                        <div class="app-sidebar__user-name">{user_name}</div>
                        <div class="app-sidebar__user-email">{user_email}</div>
                    </div>
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| do_logout(session)
                >
                    {icon("logout")}
                    " Sair"
                </Button>
            </div>
        </div>
    }
}
