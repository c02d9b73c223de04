use contracts::domain::a001_store::aggregate::Store;
use leptos::prelude::*;

use crate::shared::components::form::FormInput;
use crate::shared::crud::CrudListViewModel;

/// Fields of the store create/edit dialog
#[component]
pub fn StoreDetails(vm: CrudListViewModel<Store>) -> impl IntoView {
    view! {
        <FormInput
            label="Nome da Loja"
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
            label="Número de Funcionários"
            required=true
            input_type="number"
            step="1"
            value=vm.field(|f| &f.employees)
            on_input=vm.setter(|f, v| f.employees = v)
        />
        <FormInput
            label="Endereço"
            required=true
            value=vm.field(|f| &f.address)
            on_input=vm.setter(|f, v| f.address = v)
        />
        <FormInput
            label="Telefone"
            input_type="tel"
            value=vm.field(|f| &f.phone)
            on_input=vm.setter(|f, v| f.phone = v)
        />
        <FormInput
            label="Email"
            input_type="email"
            value=vm.field(|f| &f.email)
            on_input=vm.setter(|f, v| f.email = v)
        />
    }
}
