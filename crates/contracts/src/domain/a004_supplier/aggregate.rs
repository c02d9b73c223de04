use serde::{Deserialize, Serialize};

use crate::domain::common::form_field::{required, store_ref};
use crate::domain::common::{EntityId, ListSource, Resource, ResourceMessages};

/// Fornecedor vinculado a uma loja
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    pub address: String,
    /// Comma separated, e.g. `"Maçã, Banana, Laranja"`
    #[serde(default)]
    pub fruits: Option<String>,
    pub store_id: EntityId,
}

impl Supplier {
    pub fn fruit_list(&self) -> Vec<String> {
        split_fruits(self.fruits.as_deref().unwrap_or_default())
    }
}

/// Splits a comma separated fruit list, dropping blanks
pub fn split_fruits(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical `"A, B, C"` form of a fruit list
pub fn normalize_fruits(raw: &str) -> String {
    split_fruits(raw).join(", ")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierForm {
    pub name: String,
    pub tax_id: String,
    pub address: String,
    pub fruits: String,
    pub store_id: String,
}

/// Body of both `POST /suppliers/` and `PUT /suppliers/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierDto {
    pub name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    pub address: String,
    pub fruits: String,
    pub store_id: EntityId,
}

impl SupplierDto {
    pub fn from_form(form: &SupplierForm) -> Result<Self, String> {
        let store_id = store_ref(&form.store_id)?;
        let name = required(&form.name, "Nome")?;
        let tax_id = required(&form.tax_id, "CNPJ")?;
        let address = required(&form.address, "Endereço")?;
        let fruits = normalize_fruits(&form.fruits);
        if fruits.is_empty() {
            return Err("Preencha o campo obrigatório: Frutas".to_string());
        }
        Ok(Self {
            name,
            tax_id,
            address,
            fruits,
            store_id,
        })
    }
}

static MESSAGES: ResourceMessages = ResourceMessages {
    list_title: "Fornecedores",
    new_button: "Novo Fornecedor",
    create_title: "Novo Fornecedor",
    edit_title: "Editar Fornecedor",
    empty: "Nenhum fornecedor cadastrado",
    load_failed: "Erro ao carregar fornecedores",
    created: "Fornecedor criado com sucesso!",
    updated: "Fornecedor atualizado com sucesso!",
    save_failed: "Erro ao salvar fornecedor",
    deleted: "Fornecedor excluído com sucesso!",
    delete_failed: "Erro ao excluir fornecedor",
    confirm_delete: "Tem certeza que deseja excluir este fornecedor?",
};

impl Resource for Supplier {
    type Form = SupplierForm;
    type CreateDto = SupplierDto;
    type UpdateDto = SupplierDto;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_form(&self) -> SupplierForm {
        SupplierForm {
            name: self.name.clone(),
            tax_id: self.tax_id.clone(),
            address: self.address.clone(),
            fruits: self.fruits.clone().unwrap_or_default(),
            store_id: self.store_id.to_string(),
        }
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn list_source() -> ListSource {
        ListSource::PerStore
    }

    fn messages() -> &'static ResourceMessages {
        &MESSAGES
    }

    fn create_payload(form: &SupplierForm) -> Result<SupplierDto, String> {
        SupplierDto::from_form(form)
    }

    fn update_payload(form: &SupplierForm) -> Result<SupplierDto, String> {
        SupplierDto::from_form(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_fruits() {
        assert_eq!(normalize_fruits(" Maçã,Banana ,, Laranja "), "Maçã, Banana, Laranja");
        assert_eq!(normalize_fruits(" , "), "");
    }

    #[test]
    fn test_fruit_list_tolerates_missing_column() {
        let s: Supplier = serde_json::from_value(json!({
            "id": 2,
            "name": "Sítio Boa Vista",
            "cnpj": "98.765.432/0001-10",
            "address": "Estrada 5",
            "fruits": null,
            "store_id": 1,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        assert!(s.fruit_list().is_empty());
        assert_eq!(s.to_form().fruits, "");
    }

    #[test]
    fn test_payload() {
        let form = SupplierForm {
            name: "Sítio".to_string(),
            tax_id: "1".to_string(),
            address: "Estrada".to_string(),
            fruits: "Uva,Manga".to_string(),
            store_id: "4".to_string(),
        };
        assert_eq!(
            serde_json::to_value(Supplier::create_payload(&form).unwrap()).unwrap(),
            json!({
                "name": "Sítio",
                "cnpj": "1",
                "address": "Estrada",
                "fruits": "Uva, Manga",
                "store_id": 4
            })
        );
    }

    #[test]
    fn test_payload_requires_fruits() {
        let form = SupplierForm {
            name: "Sítio".to_string(),
            tax_id: "1".to_string(),
            address: "Estrada".to_string(),
            fruits: " , ".to_string(),
            store_id: "4".to_string(),
        };
        assert_eq!(
            Supplier::create_payload(&form),
            Err("Preencha o campo obrigatório: Frutas".to_string())
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(Supplier::by_store_path(1), "/suppliers/store/1");
        assert_eq!(Supplier::item_path(2), "/suppliers/2");
    }
}
