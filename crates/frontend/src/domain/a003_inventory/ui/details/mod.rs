use contracts::domain::a003_inventory::aggregate::{InventoryItem, FIELD_FRUIT, FIELD_STORE};
use leptos::prelude::*;

use crate::shared::components::form::{FormInput, FormSelect};
use crate::shared::crud::CrudListViewModel;

/// Fruit and store are fixed once the item exists
#[component]
pub fn InventoryDetails(vm: CrudListViewModel<InventoryItem>) -> impl IntoView {
    view! {
        <FormSelect
            label="Loja"
            required=true
            placeholder="Selecione uma loja"
            options=vm.store_options()
            value=vm.field(|f| &f.store_id)
            on_change=vm.setter(|f, v| f.store_id = v)
            disabled=vm.field_disabled(FIELD_STORE)
        />
        <FormInput
            label="Fruta"
            required=true
            value=vm.field(|f| &f.fruit)
            on_input=vm.setter(|f, v| f.fruit = v)
            disabled=vm.field_disabled(FIELD_FRUIT)
        />
        <FormInput
            label="Quantidade"
            required=true
            input_type="number"
            step="1"
            value=vm.field(|f| &f.quantity)
            on_input=vm.setter(|f, v| f.quantity = v)
        />
        <FormInput
            label="Unidade (ex: kg, un)"
            required=true
            value=vm.field(|f| &f.unit)
            on_input=vm.setter(|f, v| f.unit = v)
        />
    }
}
