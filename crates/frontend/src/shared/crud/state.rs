use contracts::domain::a001_store::aggregate::{store_name, Store};
use contracts::domain::common::{EntityId, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Put,
    Delete,
}

/// A validated write, ready to be sent
#[derive(Debug)]
pub enum Mutation<R: Resource> {
    Create(R::CreateDto),
    Update { id: EntityId, payload: R::UpdateDto },
    Delete(EntityId),
}

impl<R: Resource> Mutation<R> {
    pub fn method(&self) -> HttpMethod {
        match self {
            Mutation::Create(_) => HttpMethod::Post,
            Mutation::Update { .. } => HttpMethod::Put,
            Mutation::Delete(_) => HttpMethod::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Mutation::Create(_) => R::collection_path(),
            Mutation::Update { id, .. } | Mutation::Delete(id) => R::item_path(*id),
        }
    }

    pub fn success_message(&self) -> &'static str {
        let m = R::messages();
        match self {
            Mutation::Create(_) => m.created,
            Mutation::Update { .. } => m.updated,
            Mutation::Delete(_) => m.deleted,
        }
    }

    /// Generic text shown when the backend sends no `detail`
    pub fn failure_message(&self) -> &'static str {
        let m = R::messages();
        match self {
            Mutation::Create(_) | Mutation::Update { .. } => m.save_failed,
            Mutation::Delete(_) => m.delete_failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Closed,
    Creating,
    Editing(EntityId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogState<F> {
    pub mode: DialogMode,
    pub form: F,
}

impl<F: Default> Default for DialogState<F> {
    fn default() -> Self {
        Self {
            mode: DialogMode::Closed,
            form: F::default(),
        }
    }
}

/// Collections fetched for one list screen
#[derive(Debug, Clone)]
pub struct Loaded<R> {
    pub items: Vec<R>,
    pub stores: Vec<Store>,
}

impl<R> Default for Loaded<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            stores: Vec::new(),
        }
    }
}

/// Identity of a rendered row: the load it came from and its id
pub type RowKey = (u64, EntityId);

/// Everything a resource list screen renders
#[derive(Debug, Clone)]
pub struct CrudListState<R: Resource> {
    pub items: Vec<R>,
    /// Stores used for the store column and the store select
    pub stores: Vec<Store>,
    pub loading: bool,
    /// Bumped by every load; only the newest load may apply its result
    pub load_generation: u64,
    /// Load that produced `items`
    pub rows_generation: u64,
    pub submitting: bool,
    pub dialog: DialogState<R::Form>,
}

impl<R: Resource> Default for CrudListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            stores: Vec::new(),
            loading: false,
            load_generation: 0,
            rows_generation: 0,
            submitting: false,
            dialog: DialogState::default(),
        }
    }
}

impl<R: Resource> CrudListState<R> {
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.load_generation
    }

    /// Applies the result of load `generation`; false when a newer load superseded it
    pub fn apply_loaded(&mut self, generation: u64, loaded: Loaded<R>) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.items = loaded.items;
        self.stores = loaded.stores;
        self.rows_generation = generation;
        self.loading = false;
        true
    }

    /// Rows keyed so that every reload re-renders them
    pub fn rows(&self) -> Vec<(RowKey, R)> {
        self.items
            .iter()
            .map(|item| ((self.rows_generation, item.id()), item.clone()))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Dialog
    // ------------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.dialog = DialogState {
            mode: DialogMode::Creating,
            form: R::Form::default(),
        };
    }

    /// Opens the dialog filled from the row with `id`; false if it is not listed
    pub fn open_edit(&mut self, id: EntityId) -> bool {
        let Some(item) = self.items.iter().find(|i| i.id() == id) else {
            return false;
        };
        self.dialog = DialogState {
            mode: DialogMode::Editing(id),
            form: item.to_form(),
        };
        true
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::default();
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.mode != DialogMode::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.dialog.mode, DialogMode::Editing(_))
    }

    pub fn dialog_title(&self) -> &'static str {
        if self.is_editing() {
            R::messages().edit_title
        } else {
            R::messages().create_title
        }
    }

    pub fn is_field_disabled(&self, field: &str) -> bool {
        self.is_editing() && R::locked_on_edit().contains(&field)
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    /// Validates the open form and builds the matching write
    pub fn prepare_submit(&self) -> Result<Mutation<R>, String> {
        match self.dialog.mode {
            DialogMode::Creating => Ok(Mutation::Create(R::create_payload(&self.dialog.form)?)),
            DialogMode::Editing(id) => Ok(Mutation::Update {
                id,
                payload: R::update_payload(&self.dialog.form)?,
            }),
            DialogMode::Closed => Err("Nenhum formulário aberto".to_string()),
        }
    }

    /// Delete write for `id`, or nothing when the user declined
    pub fn delete_mutation(&self, id: EntityId, confirmed: bool) -> Option<Mutation<R>> {
        confirmed.then_some(Mutation::Delete(id))
    }

    pub fn store_name(&self, id: EntityId) -> String {
        store_name(&self.stores, id)
    }

    /// `(value, label)` pairs for a store select
    pub fn store_options(&self) -> Vec<(String, String)> {
        self.stores
            .iter()
            .map(|s| (s.id.to_string(), s.name.clone()))
            .collect()
    }
}
