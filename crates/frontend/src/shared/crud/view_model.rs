use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::state::{CrudListState, Mutation};
use crate::shared::config::app_config;
use crate::shared::confirm::confirm;
use crate::shared::notification::Notifier;
use crate::system::auth::context::{sign_out_if_unauthorized, try_use_session, SessionState};

/// ViewModel shared by every resource list screen
pub struct CrudListViewModel<R: Resource> {
    pub state: RwSignal<CrudListState<R>>,
    pub notifier: Notifier,
    session: Option<RwSignal<SessionState>>,
}

impl<R: Resource> Clone for CrudListViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for CrudListViewModel<R> {}

impl<R: Resource> CrudListViewModel<R> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CrudListState::default()),
            notifier: Notifier::new(app_config().notification_timeout_ms),
            session: try_use_session(),
        }
    }

    /// (Re)load the collection; failures empty the list
    pub fn load(&self) {
        let state = self.state;
        let notifier = self.notifier;
        let session = self.session;
        let Some(generation) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        log::debug!("[CrudList:{}] loading #{}", R::collection_name(), generation);

        spawn_local(async move {
            let (loaded, failure) = match api::load::<R>().await {
                Ok(loaded) => {
                    log::debug!(
                        "[CrudList:{}] loaded {} rows",
                        R::collection_name(),
                        loaded.items.len()
                    );
                    (loaded, None)
                }
                Err(e) => {
                    log::error!("[CrudList:{}] load failed: {}", R::collection_name(), e);
                    (Default::default(), Some(e))
                }
            };
            if state.try_update(|s| s.apply_loaded(generation, loaded)) != Some(true) {
                log::debug!("[CrudList:{}] load #{} superseded", R::collection_name(), generation);
                return;
            }
            if let Some(e) = failure {
                if !sign_out_if_unauthorized(session, e.api_error()) {
                    notifier.error(e.user_message::<R>());
                }
            }
        });
    }

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create());
    }

    pub fn open_edit(&self, id: EntityId) {
        self.state.update(|s| {
            if !s.open_edit(id) {
                log::warn!("[CrudList:{}] row {} not found", R::collection_name(), id);
            }
        });
    }

    pub fn close_dialog(&self) {
        self.state.update(|s| s.close_dialog());
    }

    /// Apply an edit to the open form
    pub fn edit_form(&self, f: impl FnOnce(&mut R::Form)) {
        self.state.update(|s| f(&mut s.dialog.form));
    }

    // ------------------------------------------------------------------------
    // Form bindings
    // ------------------------------------------------------------------------

    /// Reactive value of one form field
    pub fn field(&self, get: fn(&R::Form) -> &String) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| get(&s.dialog.form).clone()))
    }

    /// Input handler writing one form field
    pub fn setter(&self, set: fn(&mut R::Form, String)) -> Callback<String> {
        let this = *self;
        Callback::new(move |value| this.edit_form(|f| set(f, value)))
    }

    pub fn field_disabled(&self, field: &'static str) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_field_disabled(field)))
    }

    pub fn store_options(&self) -> Signal<Vec<(String, String)>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.store_options()))
    }

    /// Validate and send the open form
    pub fn submit(&self) {
        if self.state.with_untracked(|s| s.submitting) {
            return;
        }
        match self.state.with_untracked(|s| s.prepare_submit()) {
            Ok(mutation) => {
                self.state.update(|s| s.submitting = true);
                self.send(mutation, true);
            }
            Err(msg) => self.notifier.error(msg),
        }
    }

    /// Ask for confirmation, then delete the row
    pub fn delete(&self, id: EntityId) {
        let confirmed = confirm(R::messages().confirm_delete);
        match self.state.with_untracked(|s| s.delete_mutation(id, confirmed)) {
            Some(mutation) => self.send(mutation, false),
            None => log::debug!("[CrudList:{}] delete {} declined", R::collection_name(), id),
        }
    }

    fn send(&self, mutation: Mutation<R>, closes_dialog: bool) {
        let this = *self;
        spawn_local(async move {
            log::debug!(
                "[CrudList:{}] {:?} {}",
                R::collection_name(),
                mutation.method(),
                mutation.path()
            );
            let result = api::execute(&mutation).await;
            let _ = this.state.try_update(|s| s.submitting = false);
            match result {
                Ok(()) => {
                    this.notifier.success(mutation.success_message());
                    if closes_dialog {
                        let _ = this.state.try_update(|s| s.close_dialog());
                    }
                    // Refetch only once the write is acknowledged.
                    this.load();
                }
                Err(e) => {
                    log::error!(
                        "[CrudList:{}] {} failed: {}",
                        R::collection_name(),
                        mutation.path(),
                        e
                    );
                    if !sign_out_if_unauthorized(this.session, &e) {
                        this.notifier.error(e.user_message(mutation.failure_message()));
                    }
                }
            }
        });
    }
}
