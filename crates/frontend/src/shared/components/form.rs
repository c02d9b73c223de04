use leptos::prelude::*;

/// Labelled text/number input bound to a signal
#[component]
pub fn FormInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// "text" (default), "number", "email", "tel"
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// `step` attribute for number inputs
    #[prop(optional)]
    step: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then_some(" *")}
            </label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                step=step
                min=input_type.filter(|t| *t == "number").map(|_| "0")
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled select with a leading empty placeholder option
#[component]
pub fn FormSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// `(value, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then_some(" *")}
            </label>
            <select
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
