//! Building blocks shared by the resource list screens.

use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use thaw::*;

use super::view_model::CrudListViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notification::NotificationBanner;

/// Title, row count, refresh and "new" buttons, then the notification banner
#[component]
pub fn CrudPageHeader<R: Resource>(vm: CrudListViewModel<R>) -> impl IntoView {
    let messages = R::messages();
    let loading = Signal::derive(move || vm.state.with(|s| s.loading));

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{messages.list_title}</h1>
                <Badge>
                    {move || vm.state.with(|s| s.items.len()).to_string()}
                </Badge>
            </div>
            <div class="page__header-right">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.load()
                    disabled=loading
                >
                    {icon("refresh")}
                    " Atualizar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.open_create()
                >
                    {icon("plus")}
                    {format!(" {}", messages.new_button)}
                </Button>
            </div>
        </div>
        <NotificationBanner notifier=vm.notifier />
    }
}

/// Spinner while loading, the empty text when there are no rows, else the table
#[component]
pub fn CrudTableBody<R: Resource>(vm: CrudListViewModel<R>, children: ChildrenFn) -> impl IntoView {
    let empty_text = R::messages().empty;

    view! {
        {move || {
            let (loading, empty) = vm.state.with(|s| (s.loading, s.items.is_empty()));
            if loading && empty {
                view! {
                    <div class="page__loading">
                        <Spinner label="Carregando...".to_string() />
                    </div>
                }
                .into_any()
            } else if empty {
                view! { <div class="page__empty">{empty_text}</div> }.into_any()
            } else {
                children().into_any()
            }
        }}
    }
}

/// Edit and delete buttons of one row
#[component]
pub fn RowActions<R: Resource>(vm: CrudListViewModel<R>, id: EntityId) -> impl IntoView {
    view! {
        <TableCell>
            <TableCellLayout>
                <div class="table__actions">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| vm.open_edit(id)
                        attr:title="Editar"
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| vm.delete(id)
                        attr:title="Excluir"
                        class="button--danger"
                    >
                        {icon("delete")}
                    </Button>
                </div>
            </TableCellLayout>
        </TableCell>
    }
}

/// Create/edit dialog; `children` renders the form fields
#[component]
pub fn CrudDialog<R: Resource>(vm: CrudListViewModel<R>, children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    let title = Signal::derive(move || vm.state.with(|s| s.dialog_title().to_string()));
    let submitting = Signal::derive(move || vm.state.with(|s| s.submitting));
    let on_close = Callback::new(move |_| vm.close_dialog());

    view! {
        <Show when=move || vm.state.with(|s| s.is_dialog_open())>
            <Modal
                title=title
                on_close=on_close
                footer=Box::new(move || {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.close_dialog()
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            loading=submitting
                            disabled=submitting
                            on_click=move |_| vm.submit()
                        >
                            "Salvar"
                        </Button>
                    }
                    .into_any()
                })
            >
                <form
                    class="form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    {children.with_value(|c| c())}
                </form>
            </Modal>
        </Show>
    }
}
