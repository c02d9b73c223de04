use contracts::domain::a001_store::aggregate::Store;
use contracts::domain::common::{ListSource, Resource};
use futures::future::{try_join_all, LocalBoxFuture};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::state::{Loaded, Mutation};
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{delete, get_json, post_json, put_json};

/// Where list screens read their collections from
pub trait JsonSource {
    fn get(&self, path: String) -> LocalBoxFuture<'_, Result<Value, ApiError>>;
}

/// The backend, over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl JsonSource for HttpSource {
    fn get(&self, path: String) -> LocalBoxFuture<'_, Result<Value, ApiError>> {
        Box::pin(async move { get_json::<Value>(&path).await })
    }
}

/// Which request of a list load failed
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("stores: {0}")]
    Stores(ApiError),
    #[error("{0}")]
    Items(ApiError),
}

impl LoadError {
    pub fn api_error(&self) -> &ApiError {
        match self {
            LoadError::Stores(e) | LoadError::Items(e) => e,
        }
    }

    /// Text shown to the user for a failed load of `R`
    pub fn user_message<R: Resource>(&self) -> &'static str {
        match self {
            LoadError::Stores(_) => Store::messages().load_failed,
            LoadError::Items(_) => R::messages().load_failed,
        }
    }
}

async fn fetch<T: DeserializeOwned, S: JsonSource>(source: &S, path: String) -> Result<Vec<T>, ApiError> {
    let value = source.get(path).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch everything the list screen of `R` shows
pub async fn load<R: Resource>() -> Result<Loaded<R>, LoadError> {
    load_from::<R, _>(&HttpSource).await
}

pub async fn load_from<R: Resource, S: JsonSource>(source: &S) -> Result<Loaded<R>, LoadError> {
    match R::list_source() {
        ListSource::Collection => Ok(Loaded {
            items: fetch(source, R::collection_path())
                .await
                .map_err(LoadError::Items)?,
            stores: Vec::new(),
        }),
        ListSource::CollectionWithStores => {
            let (items, stores) = futures::join!(
                fetch::<R, _>(source, R::collection_path()),
                fetch::<Store, _>(source, Store::collection_path())
            );
            // The store column degrades to "-" when stores are unavailable.
            let stores = stores.unwrap_or_else(|e| {
                log::warn!("[CrudList:{}] stores unavailable: {}", R::collection_name(), e);
                Vec::new()
            });
            Ok(Loaded {
                items: items.map_err(LoadError::Items)?,
                stores,
            })
        }
        ListSource::PerStore => {
            let stores: Vec<Store> = fetch(source, Store::collection_path())
                .await
                .map_err(LoadError::Stores)?;
            if stores.is_empty() {
                return Ok(Loaded::default());
            }
            let per_store = try_join_all(
                stores
                    .iter()
                    .map(|s| fetch::<R, _>(source, R::by_store_path(s.id))),
            )
            .await
            .map_err(LoadError::Items)?;
            Ok(Loaded {
                items: per_store.into_iter().flatten().collect(),
                stores,
            })
        }
    }
}

/// Send a write; resolves once the backend has answered
pub async fn execute<R: Resource>(mutation: &Mutation<R>) -> Result<(), ApiError> {
    let path = mutation.path();
    match mutation {
        Mutation::Create(payload) => post_json(&path, payload).await,
        Mutation::Update { payload, .. } => put_json(&path, payload).await,
        Mutation::Delete(_) => delete(&path).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_sale::aggregate::Sale;
    use contracts::domain::a003_inventory::aggregate::InventoryItem;
    use contracts::domain::a004_supplier::aggregate::Supplier;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Canned answers per path; unknown paths answer 404
    #[derive(Default)]
    struct FakeBackend {
        answers: HashMap<String, Result<Value, u16>>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn ok(mut self, path: &str, body: Value) -> Self {
            self.answers.insert(path.to_string(), Ok(body));
            self
        }

        fn status(mut self, path: &str, status: u16) -> Self {
            self.answers.insert(path.to_string(), Err(status));
            self
        }

        fn requested(&self) -> Vec<String> {
            let mut paths = self.requested.borrow().clone();
            paths.sort();
            paths
        }
    }

    impl JsonSource for FakeBackend {
        fn get(&self, path: String) -> LocalBoxFuture<'_, Result<Value, ApiError>> {
            self.requested.borrow_mut().push(path.clone());
            let answer = match self.answers.get(&path) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(status)) => Err(ApiError::from_response(*status, "")),
                None => Err(ApiError::from_response(404, "")),
            };
            Box::pin(async move { answer })
        }
    }

    fn stores_json() -> Value {
        json!([
            {"id": 1, "name": "Centro", "cnpj": "1", "employees": 3, "address": "Rua A"},
            {"id": 2, "name": "Bairro", "cnpj": "2", "employees": 5, "address": "Rua B"}
        ])
    }

    fn inventory_json(id: i64, store_id: i64, fruit: &str) -> Value {
        json!({
            "id": id, "fruit": fruit, "quantity": 10, "unit": "kg", "store_id": store_id,
            "created_at": "2024-05-01T10:00:00", "updated_at": "2024-05-02T11:30:00"
        })
    }

    #[test]
    fn test_stores_single_request() {
        let backend = FakeBackend::default().ok("/stores/", stores_json());
        let loaded = block_on(load_from::<Store, _>(&backend)).unwrap();
        assert_eq!(loaded.items.len(), 2);
        assert!(loaded.stores.is_empty());
        assert_eq!(backend.requested(), vec!["/stores/"]);
    }

    #[test]
    fn test_per_store_results_are_flattened() {
        let backend = FakeBackend::default()
            .ok("/stores/", stores_json())
            .ok("/inventory/store/1", json!([inventory_json(10, 1, "Banana"), inventory_json(11, 1, "Maçã")]))
            .ok("/inventory/store/2", json!([inventory_json(20, 2, "Uva")]));

        let loaded = block_on(load_from::<InventoryItem, _>(&backend)).unwrap();
        let ids: Vec<_> = loaded.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![10, 11, 20]);
        assert_eq!(loaded.stores.len(), 2);
        assert_eq!(
            backend.requested(),
            vec!["/inventory/store/1", "/inventory/store/2", "/stores/"]
        );
    }

    #[test]
    fn test_no_stores_means_no_further_request() {
        let backend = FakeBackend::default().ok("/stores/", json!([]));
        let loaded = block_on(load_from::<Supplier, _>(&backend)).unwrap();
        assert!(loaded.items.is_empty());
        assert_eq!(backend.requested(), vec!["/stores/"]);
    }

    #[test]
    fn test_any_per_store_failure_fails_the_load() {
        let backend = FakeBackend::default()
            .ok("/stores/", stores_json())
            .ok("/inventory/store/1", json!([inventory_json(10, 1, "Banana")]))
            .status("/inventory/store/2", 500);

        let err = block_on(load_from::<InventoryItem, _>(&backend)).unwrap_err();
        assert!(matches!(err, LoadError::Items(_)));
        assert_eq!(err.user_message::<InventoryItem>(), "Erro ao carregar estoque");
    }

    #[test]
    fn test_per_store_stores_failure_names_the_stores() {
        let backend = FakeBackend::default().status("/stores/", 500);
        let err = block_on(load_from::<Supplier, _>(&backend)).unwrap_err();
        assert!(matches!(err, LoadError::Stores(_)));
        assert_eq!(err.user_message::<Supplier>(), "Erro ao carregar lojas");
        assert_eq!(backend.requested(), vec!["/stores/"]);
    }

    #[test]
    fn test_sales_ignore_store_failure() {
        let backend = FakeBackend::default()
            .ok(
                "/sales/",
                json!([{
                    "id": 3, "fruit": "Manga", "quantity": 2, "value": 9.5,
                    "store_id": 1, "created_at": "2024-05-01T10:00:00"
                }]),
            )
            .status("/stores/", 500);

        let loaded = block_on(load_from::<Sale, _>(&backend)).unwrap();
        assert_eq!(loaded.items.len(), 1);
        assert!(loaded.stores.is_empty());
    }

    #[test]
    fn test_sales_failure_is_reported() {
        let backend = FakeBackend::default()
            .status("/sales/", 500)
            .ok("/stores/", stores_json());
        let err = block_on(load_from::<Sale, _>(&backend)).unwrap_err();
        assert_eq!(err.user_message::<Sale>(), "Erro ao carregar vendas");
    }

    #[test]
    fn test_undecodable_body_is_a_decode_error() {
        let backend = FakeBackend::default().ok("/stores/", json!({"detail": "nope"}));
        let err = block_on(load_from::<Store, _>(&backend)).unwrap_err();
        assert!(matches!(err.api_error(), ApiError::Decode(_)));
    }
}
