use serde::{Deserialize, Serialize};

use crate::domain::common::form_field::{non_negative_int, optional, required};
use crate::domain::common::{EntityId, ListSource, Resource, ResourceMessages};

// ============================================================================
// Entity
// ============================================================================

/// Loja do usuário autenticado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: EntityId,
    pub name: String,

    /// CNPJ
    #[serde(rename = "cnpj")]
    pub tax_id: String,

    #[serde(default)]
    pub employees: i64,
    pub address: String,

    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Name of the store with the given id, `-` when it is not in `stores`
pub fn store_name(stores: &[Store], id: EntityId) -> String {
    stores
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreForm {
    pub name: String,
    pub tax_id: String,
    pub employees: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Body of both `POST /stores/` and `PUT /stores/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDto {
    pub name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    pub employees: i64,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl StoreDto {
    pub fn from_form(form: &StoreForm) -> Result<Self, String> {
        Ok(Self {
            name: required(&form.name, "Nome da Loja")?,
            tax_id: required(&form.tax_id, "CNPJ")?,
            employees: non_negative_int(&form.employees, "Número de Funcionários")?,
            address: required(&form.address, "Endereço")?,
            phone: optional(&form.phone),
            email: optional(&form.email),
        })
    }
}

static MESSAGES: ResourceMessages = ResourceMessages {
    list_title: "Minhas Lojas",
    new_button: "Nova Loja",
    create_title: "Nova Loja",
    edit_title: "Editar Loja",
    empty: "Nenhuma loja cadastrada",
    load_failed: "Erro ao carregar lojas",
    created: "Loja criada com sucesso!",
    updated: "Loja atualizada com sucesso!",
    save_failed: "Erro ao salvar loja",
    deleted: "Loja excluída com sucesso!",
    delete_failed: "Erro ao excluir loja",
    confirm_delete: "Tem certeza que deseja excluir esta loja?",
};

impl Resource for Store {
    type Form = StoreForm;
    type CreateDto = StoreDto;
    type UpdateDto = StoreDto;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_form(&self) -> StoreForm {
        StoreForm {
            name: self.name.clone(),
            tax_id: self.tax_id.clone(),
            employees: self.employees.to_string(),
            address: self.address.clone(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
        }
    }

    fn collection_name() -> &'static str {
        "stores"
    }

    fn list_source() -> ListSource {
        ListSource::Collection
    }

    fn messages() -> &'static ResourceMessages {
        &MESSAGES
    }

    fn create_payload(form: &StoreForm) -> Result<StoreDto, String> {
        StoreDto::from_form(form)
    }

    fn update_payload(form: &StoreForm) -> Result<StoreDto, String> {
        StoreDto::from_form(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(id: EntityId, name: &str) -> Store {
        Store {
            id,
            name: name.to_string(),
            tax_id: "12.345.678/0001-90".to_string(),
            employees: 3,
            address: "Rua A, 1".to_string(),
            phone: None,
            email: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_decodes_backend_row() {
        let row: Store = serde_json::from_value(json!({
            "id": 4,
            "name": "Hortifruti Centro",
            "cnpj": "12.345.678/0001-90",
            "employees": 8,
            "address": "Av. Brasil, 100",
            "phone": null,
            "email": "centro@hf.com",
            "created_at": "2024-03-15T14:02:26.123456",
            "updated_at": "2024-03-15T14:02:26.123456"
        }))
        .unwrap();
        assert_eq!(row.id, 4);
        assert_eq!(row.tax_id, "12.345.678/0001-90");
        assert_eq!(row.phone, None);
        assert_eq!(row.email.as_deref(), Some("centro@hf.com"));
    }

    #[test]
    fn test_payload_from_form() {
        let form = StoreForm {
            name: " Loja 1 ".to_string(),
            tax_id: "123".to_string(),
            employees: "5".to_string(),
            address: "Rua B".to_string(),
            phone: String::new(),
            email: "loja@x.com".to_string(),
        };
        let dto = Store::create_payload(&form).unwrap();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "name": "Loja 1",
                "cnpj": "123",
                "employees": 5,
                "address": "Rua B",
                "phone": null,
                "email": "loja@x.com"
            })
        );
    }

    #[test]
    fn test_payload_requires_name() {
        let form = StoreForm {
            employees: "0".to_string(),
            ..Default::default()
        };
        assert_eq!(
            Store::create_payload(&form),
            Err("Preencha o campo obrigatório: Nome da Loja".to_string())
        );
    }

    #[test]
    fn test_form_round_trips_optional_contacts() {
        let mut s = store(1, "A");
        s.phone = Some("11 9999-0000".to_string());
        let form = s.to_form();
        assert_eq!(form.phone, "11 9999-0000");
        assert_eq!(form.email, "");
        assert_eq!(form.employees, "3");
    }

    #[test]
    fn test_paths() {
        assert_eq!(Store::collection_path(), "/stores/");
        assert_eq!(Store::item_path(9), "/stores/9");
        assert!(Store::locked_on_edit().is_empty());
    }

    #[test]
    fn test_store_name_lookup() {
        let stores = vec![store(1, "Centro"), store(2, "Norte")];
        assert_eq!(store_name(&stores, 2), "Norte");
        assert_eq!(store_name(&stores, 3), "-");
    }
}
