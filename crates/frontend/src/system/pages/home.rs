use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let user_name = move || {
        session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())
    };

    view! {
        <PageFrame page_id="home--system" category=PAGE_CAT_SYSTEM>
            <div class="home-card">
                <h1 class="home-card__title">"Bem-vindo!"</h1>
                <h2 class="home-card__user">{user_name}</h2>
                <p class="home-card__text">
                    "Explore o Fruit Checker para identificar frutas e descobrir suas características. "
                    "Use a barra lateral para navegar entre as funcionalidades disponíveis."
                </p>
            </div>
        </PageFrame>
    }
}
