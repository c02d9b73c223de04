use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Identifier assigned by the backend (SQL integer primary key)
pub type EntityId = i64;

/// How the list screen obtains the full collection of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// `GET /{collection}/`
    Collection,
    /// `GET /{collection}/` plus `GET /stores/` to resolve the store column
    CollectionWithStores,
    /// `GET /stores/`, then `GET /{collection}/store/{id}` for every store, flattened
    PerStore,
}

/// User-facing texts of one resource (pt-BR)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMessages {
    pub list_title: &'static str,
    pub new_button: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub empty: &'static str,
    pub load_failed: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub save_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub confirm_delete: &'static str,
}

/// A backend entity exposed as a REST collection.
///
/// One implementation per entity drives the generic list/dialog machinery of the
/// client: where to fetch it, how to turn a row into an editable form and how to
/// turn the form back into the create/update payloads.
pub trait Resource: Clone + Debug + DeserializeOwned + Send + Sync + 'static {
    /// Editable form state; every field is kept as typed text
    type Form: Clone + Debug + Default + PartialEq + Send + Sync + 'static;
    /// Body of `POST /{collection}/`
    type CreateDto: Serialize + Debug + 'static;
    /// Body of `PUT /{collection}/{id}`
    type UpdateDto: Serialize + Debug + 'static;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Backend id of the record
    fn id(&self) -> EntityId;

    /// Form pre-filled from this record, used when the edit dialog opens
    fn to_form(&self) -> Self::Form;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Path segment of the collection, e.g. `"stores"`
    fn collection_name() -> &'static str;

    /// Strategy used by the list screen to load the collection
    fn list_source() -> ListSource;

    /// Texts shown in titles, dialogs and notifications
    fn messages() -> &'static ResourceMessages;

    /// Form fields the backend refuses to change once the record exists
    fn locked_on_edit() -> &'static [&'static str] {
        &[]
    }

    // ============================================================================
    // Payloads
    // ============================================================================

    fn create_payload(form: &Self::Form) -> Result<Self::CreateDto, String>;

    fn update_payload(form: &Self::Form) -> Result<Self::UpdateDto, String>;

    // ============================================================================
    // Endpoints
    // ============================================================================

    fn collection_path() -> String {
        format!("/{}/", Self::collection_name())
    }

    fn item_path(id: EntityId) -> String {
        format!("/{}/{}", Self::collection_name(), id)
    }

    fn by_store_path(store_id: EntityId) -> String {
        format!("/{}/store/{}", Self::collection_name(), store_id)
    }
}
