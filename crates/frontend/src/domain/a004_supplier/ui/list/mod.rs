use contracts::domain::a004_supplier::aggregate::Supplier;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_supplier::ui::details::SupplierDetails;
use crate::shared::crud::{CrudDialog, CrudListViewModel, CrudPageHeader, CrudTableBody, RowActions};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let vm = CrudListViewModel::<Supplier>::new();
    vm.load();

    view! {
        <PageFrame page_id="a004_supplier--list" category=PAGE_CAT_LIST>
            <CrudPageHeader vm=vm />

            <div class="page__content">
                <CrudTableBody vm=vm>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nome"</TableHeaderCell>
                                <TableHeaderCell>"CNPJ"</TableHeaderCell>
                                <TableHeaderCell>"Frutas Fornecidas"</TableHeaderCell>
                                <TableHeaderCell>"Loja"</TableHeaderCell>
                                <TableHeaderCell>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || vm.state.with(|s| s.rows())
                                key=|(key, _)| *key
                                children=move |(_, supplier)| {
                                    let id = supplier.id();
                                    let fruits = supplier.fruit_list();
                                    let name = supplier.name;
                                    let tax_id = supplier.tax_id;
                                    let store_id = supplier.store_id;
                                    let store = move || vm.state.with(|s| s.store_name(store_id));
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{tax_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="table__tags">
                                                        {fruits
                                                            .into_iter()
                                                            .map(|fruit| view! { <Tag>{fruit}</Tag> })
                                                            .collect_view()}
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{store}</TableCellLayout>
                                            </TableCell>
                                            <RowActions vm=vm id=id />
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </CrudTableBody>
            </div>

            <CrudDialog vm=vm>
                <SupplierDetails vm=vm />
            </CrudDialog>
        </PageFrame>
    }
}
