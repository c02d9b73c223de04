use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="home-card">
                <h1 class="home-card__title">"Página não encontrada"</h1>
                <p class="home-card__text">"O endereço acessado não existe."</p>
                <A href="/">"Voltar para o início"</A>
            </div>
        </PageFrame>
    }
}
