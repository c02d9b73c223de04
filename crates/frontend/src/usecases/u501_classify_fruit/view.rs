use super::api;
use super::state::ClassifyState;
use crate::shared::config::app_config;
use crate::shared::notification::{NotificationBanner, Notifier};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::auth::context::{sign_out_if_unauthorized, try_use_session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::{File, HtmlInputElement, Url};

fn revoke(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("[ClassifyFruit] revoke {} failed: {:?}", url, e);
    }
}

#[component]
pub fn ClassifyFruitPage() -> impl IntoView {
    let state = RwSignal::new(ClassifyState::default());
    let file = StoredValue::new_local(None::<File>);
    let notifier = Notifier::new(app_config().classify_notification_timeout_ms);
    let session = try_use_session();

    on_cleanup(move || {
        if let Some(Some(url)) = state.try_with_untracked(|s| s.preview_url.clone()) {
            revoke(&url);
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(picked) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let preview = match Url::create_object_url_with_blob(&picked) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("[ClassifyFruit] preview failed: {:?}", e);
                None
            }
        };
        log::debug!("[ClassifyFruit] picked {}", picked.name());
        file.set_value(Some(picked));
        if let Some(Some(old)) = state.try_update(|s| s.pick(preview)) {
            revoke(&old);
        }
    };

    let on_submit = move || {
        if !state.with_untracked(|s| s.can_submit()) {
            return;
        }
        let picked = file.get_value();
        match state.try_update(|s| s.begin(picked.is_some())) {
            Some(Ok(())) => {}
            Some(Err(msg)) => {
                notifier.error(msg);
                return;
            }
            None => return,
        }
        let Some(picked) = picked else {
            return;
        };

        spawn_local(async move {
            let outcome = api::classify(&picked).await;
            match &outcome {
                Ok(r) => log::debug!("[ClassifyFruit] {} ({})", r.label, r.probability_display()),
                Err(e) => {
                    log::warn!("[ClassifyFruit] classify failed: {}", e);
                    if sign_out_if_unauthorized(session, e) {
                        let _ = state.try_update(|s| s.loading = false);
                        return;
                    }
                }
            }
            if let Some(Some(msg)) = state.try_update(|s| s.finish(outcome)) {
                notifier.error(msg);
            }
        });
    };

    let busy = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="u501_classify_fruit--usecase" category=PAGE_CAT_USECASE>
            <div class="classify-card">
                <h1 class="classify-card__title">"Verificar Fruta"</h1>

                <NotificationBanner notifier=notifier />

                <div class="classify-card__controls">
                    <label class="button button--primary classify-card__picker">
                        "Selecionar Imagem"
                        <input
                            type="file"
                            accept="image/*"
                            style="display: none;"
                            on:change=on_file_change
                        />
                    </label>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=busy
                        on_click=move |_| on_submit()
                    >
                        {move || {
                            if busy.get() {
                                view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                            } else {
                                "Verificar".into_any()
                            }
                        }}
                    </Button>
                </div>

                {move || {
                    state.with(|s| s.preview_url.clone()).map(|url| {
                        view! {
                            <div class="classify-card__preview">
                                <img
                                    src=url
                                    alt="Imagem selecionada"
                                    style="max-width: 100%; max-height: 250px; border-radius: 8px; margin-bottom: 16px;"
                                />
                            </div>
                        }
                    })
                }}

                {move || {
                    state.with(|s| s.result.clone()).map(|r| {
                        let color = if r.is_spoiled() { "red" } else { "green" };
                        view! {
                            <div class="classify-card__result">
                                <h3 style=format!("color: {}; font-weight: 700;", color)>
                                    "Resultado: " {r.label.clone()}
                                </h3>
                                <p>"Probabilidade: " {r.probability_display()}</p>
                            </div>
                        }
                    })
                }}
            </div>
        </PageFrame>
    }
}
