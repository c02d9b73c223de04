use contracts::domain::a004_supplier::aggregate::Supplier;
use leptos::prelude::*;

use crate::shared::components::form::{FormInput, FormSelect};
use crate::shared::crud::CrudListViewModel;

#[component]
pub fn SupplierDetails(vm: CrudListViewModel<Supplier>) -> impl IntoView {
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
            label="Nome"
            required=true
            value=vm.field(|f| &f.name)
            on_input=vm.setter(|f, v| f.name = v)
        />
        <FormInput
            label="CNPJ"
            required=true
            placeholder="00.000.000/0000-00"
            value=vm.field(|f| &f.tax_id)
            on_input=vm.setter(|f, v| f.tax_id = v)
        />
        <FormInput
            label="Endereço"
            required=true
            value=vm.field(|f| &f.address)
            on_input=vm.setter(|f, v| f.address = v)
        />
        <FormInput
            label="Frutas (separadas por vírgula)"
            required=true
            placeholder="Maçã, Banana, Laranja"
            value=vm.field(|f| &f.fruits)
            on_input=vm.setter(|f, v| f.fruits = v)
        />
    }
}
