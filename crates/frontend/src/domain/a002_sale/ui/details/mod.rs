use contracts::domain::a002_sale::aggregate::Sale;
use leptos::prelude::*;

use crate::shared::components::form::{FormInput, FormSelect};
use crate::shared::crud::CrudListViewModel;

#[component]
pub fn SaleDetails(vm: CrudListViewModel<Sale>) -> impl IntoView {
    view! {
        <FormSelect
            label="Loja"
            required=true
            placeholder="Selecione uma loja"
            options=vm.store_options()
            value=vm.field(|f| &f.store_id)
            on_change=vm.setter(|f, v| f.store_id = v)
        />
        <FormInput
            label="Fruta"
            required=true
            value=vm.field(|f| &f.fruit)
            on_input=vm.setter(|f, v| f.fruit = v)
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
            label="Valor"
            required=true
            input_type="number"
            step="0.01"
            placeholder="0.00"
            value=vm.field(|f| &f.value)
            on_input=vm.setter(|f, v| f.value = v)
        />
    }
}
