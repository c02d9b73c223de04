use serde::{Deserialize, Serialize};

use crate::domain::common::form_field::{non_negative_decimal, non_negative_int, required, store_ref};
use crate::domain::common::{EntityId, ListSource, Resource, ResourceMessages};

/// Venda de uma fruta em uma loja
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: EntityId,
    pub fruit: String,
    pub quantity: i64,
    /// Monetary value in BRL
    pub value: f64,
    pub store_id: EntityId,
    pub created_at: String,
}

impl Sale {
    /// `R$ 12.50`
    pub fn value_display(&self) -> String {
        format!("R$ {:.2}", self.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleForm {
    pub fruit: String,
    pub quantity: String,
    pub value: String,
    pub store_id: String,
}

/// Body of both `POST /sales/` and `PUT /sales/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDto {
    pub value: f64,
    pub quantity: i64,
    pub fruit: String,
    pub store_id: EntityId,
}

impl SaleDto {
    pub fn from_form(form: &SaleForm) -> Result<Self, String> {
        Ok(Self {
            store_id: store_ref(&form.store_id)?,
            fruit: required(&form.fruit, "Fruta")?,
            quantity: non_negative_int(&form.quantity, "Quantidade")?,
            value: non_negative_decimal(&form.value, "Valor")?,
        })
    }
}

static MESSAGES: ResourceMessages = ResourceMessages {
    list_title: "Vendas",
    new_button: "Nova Venda",
    create_title: "Nova Venda",
    edit_title: "Editar Venda",
    empty: "Nenhuma venda registrada",
    load_failed: "Erro ao carregar vendas",
    created: "Venda criada com sucesso!",
    updated: "Venda atualizada com sucesso!",
    save_failed: "Erro ao salvar venda",
    deleted: "Venda excluída com sucesso!",
    delete_failed: "Erro ao excluir venda",
    confirm_delete: "Tem certeza que deseja excluir esta venda?",
};

impl Resource for Sale {
    type Form = SaleForm;
    type CreateDto = SaleDto;
    type UpdateDto = SaleDto;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_form(&self) -> SaleForm {
        SaleForm {
            fruit: self.fruit.clone(),
            quantity: self.quantity.to_string(),
            value: self.value.to_string(),
            store_id: self.store_id.to_string(),
        }
    }

    fn collection_name() -> &'static str {
        "sales"
    }

    fn list_source() -> ListSource {
        ListSource::CollectionWithStores
    }

    fn messages() -> &'static ResourceMessages {
        &MESSAGES
    }

    fn create_payload(form: &SaleForm) -> Result<SaleDto, String> {
        SaleDto::from_form(form)
    }

    fn update_payload(form: &SaleForm) -> Result<SaleDto, String> {
        SaleDto::from_form(form)
    }
}
