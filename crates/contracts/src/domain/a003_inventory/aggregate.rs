use serde::{Deserialize, Serialize};

use crate::domain::common::form_field::{non_negative_int, required, store_ref};
use crate::domain::common::{EntityId, ListSource, Resource, ResourceMessages};

/// Item de estoque de uma loja
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: EntityId,
    pub fruit: String,
    pub quantity: i64,
    /// e.g. `kg`, `un`
    pub unit: String,
    pub store_id: EntityId,
    pub created_at: String,
    pub updated_at: String,
}

pub const FIELD_FRUIT: &str = "fruit";
pub const FIELD_STORE: &str = "store_id";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryForm {
    pub fruit: String,
    pub quantity: String,
    pub unit: String,
    pub store_id: String,
}

/// Body of `POST /inventory/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryCreateDto {
    pub fruit: String,
    pub quantity: i64,
    pub unit: String,
    pub store_id: EntityId,
}

/// Body of `PUT /inventory/{id}`; fruit and store cannot change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryUpdateDto {
    pub quantity: i64,
    pub unit: String,
}

static MESSAGES: ResourceMessages = ResourceMessages {
    list_title: "Estoque",
    new_button: "Novo Item",
    create_title: "Novo Item no Estoque",
    edit_title: "Editar Item do Estoque",
    empty: "Nenhum item no estoque",
    load_failed: "Erro ao carregar estoque",
    created: "Item criado com sucesso!",
    updated: "Item atualizado com sucesso!",
    save_failed: "Erro ao salvar item",
    deleted: "Item excluído com sucesso!",
    delete_failed: "Erro ao excluir item",
    confirm_delete: "Tem certeza que deseja excluir este item do estoque?",
};

static LOCKED_ON_EDIT: [&str; 2] = [FIELD_FRUIT, FIELD_STORE];

impl Resource for InventoryItem {
    type Form = InventoryForm;
    type CreateDto = InventoryCreateDto;
    type UpdateDto = InventoryUpdateDto;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_form(&self) -> InventoryForm {
        InventoryForm {
            fruit: self.fruit.clone(),
            quantity: self.quantity.to_string(),
            unit: self.unit.clone(),
            store_id: self.store_id.to_string(),
        }
    }

    fn collection_name() -> &'static str {
        "inventory"
    }

    fn list_source() -> ListSource {
        ListSource::PerStore
    }

    fn messages() -> &'static ResourceMessages {
        &MESSAGES
    }

    fn locked_on_edit() -> &'static [&'static str] {
        &LOCKED_ON_EDIT
    }

    fn create_payload(form: &InventoryForm) -> Result<InventoryCreateDto, String> {
        Ok(InventoryCreateDto {
            store_id: store_ref(&form.store_id)?,
            fruit: required(&form.fruit, "Fruta")?,
            quantity: non_negative_int(&form.quantity, "Quantidade")?,
            unit: required(&form.unit, "Unidade")?,
        })
    }

    fn update_payload(form: &InventoryForm) -> Result<InventoryUpdateDto, String> {
        Ok(InventoryUpdateDto {
            quantity: non_negative_int(&form.quantity, "Quantidade")?,
            unit: required(&form.unit, "Unidade")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> InventoryForm {
        InventoryForm {
            fruit: "Laranja".to_string(),
            quantity: "40".to_string(),
            unit: "kg".to_string(),
            store_id: "3".to_string(),
        }
    }

    #[test]
    fn test_create_payload_carries_identity_fields() {
        assert_eq!(
            serde_json::to_value(InventoryItem::create_payload(&form()).unwrap()).unwrap(),
            json!({ "fruit": "Laranja", "quantity": 40, "unit": "kg", "store_id": 3 })
        );
    }

    #[test]
    fn test_update_payload_omits_identity_fields() {
        let mut f = form();
        f.store_id = String::new();
        assert_eq!(
            serde_json::to_value(InventoryItem::update_payload(&f).unwrap()).unwrap(),
            json!({ "quantity": 40, "unit": "kg" })
        );
    }

    #[test]
    fn test_locked_fields_and_fan_out() {
        assert_eq!(InventoryItem::locked_on_edit(), &["fruit", "store_id"]);
        assert_eq!(InventoryItem::list_source(), ListSource::PerStore);
        assert_eq!(InventoryItem::by_store_path(3), "/inventory/store/3");
        assert_eq!(InventoryItem::item_path(8), "/inventory/8");
        assert_eq!(InventoryItem::collection_path(), "/inventory/");
    }
}
