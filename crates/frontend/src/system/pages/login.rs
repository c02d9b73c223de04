use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use thaw::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::api::google_login_url;
use crate::system::auth::context::use_session;
use crate::system::auth::cookie::{expire_host_only_cookie, SESSION_COOKIE};
use crate::system::auth::guard::{return_path, FROM_PARAM};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let continue_to = Memo::new(move |_| return_path(query.with(|q| q.get(FROM_PARAM)).as_deref()));

    // Drop whatever is left of a previous OAuth handshake.
    expire_host_only_cookie(SESSION_COOKIE);

    let on_google_login = move |_| {
        let url = google_login_url();
        log::debug!("[Login] redirecting to {}", url);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&url) {
                log::error!("[Login] redirect failed: {:?}", e);
            }
        }
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Bem-vindo ao Fruit Checker"</h1>
                    <p class="login-box__subtitle">
                        "Faça login para começar a identificar frutas e explorar suas características"
                    </p>

                    <Button
                        appearance=ButtonAppearance::Primary
                        attr:style="width: 100%;"
                        on_click=on_google_login
                    >
                        "Entrar com Google"
                    </Button>

                    <Show when=move || session.with(|s| s.is_authenticated())>
                        <p class="login-box__continue">
                            {move || {
                                session
                                    .with(|s| s.user.as_ref().map(|u| u.name.clone()))
                                    .map(|name| format!("Você já está conectado como {}. ", name))
                            }}
                            <A href=move || continue_to.get()>"Continuar"</A>
                        </p>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
