use contracts::domain::a001_store::aggregate::Store;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_store::ui::details::StoreDetails;
use crate::shared::crud::{CrudDialog, CrudListViewModel, CrudPageHeader, CrudTableBody, RowActions};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
#[allow(non_snake_case)]
pub fn StoreList() -> impl IntoView {
    let vm = CrudListViewModel::<Store>::new();
    vm.load();

    view! {
        <PageFrame page_id="a001_store--list" category=PAGE_CAT_LIST>
            <CrudPageHeader vm=vm />

            <div class="page__content">
                <CrudTableBody vm=vm>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nome"</TableHeaderCell>
                                <TableHeaderCell>"CNPJ"</TableHeaderCell>
                                <TableHeaderCell>"Funcionários"</TableHeaderCell>
                                <TableHeaderCell>"Endereço"</TableHeaderCell>
                                <TableHeaderCell>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || vm.state.with(|s| s.rows())
                                key=|(key, _)| *key
                                children=move |(_, store)| {
                                    let id = store.id();
                                    let name = store.name;
                                    let tax_id = store.tax_id;
                                    let employees = store.employees;
                                    let address = store.address;
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
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {employees}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{address}</TableCellLayout>
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
                <StoreDetails vm=vm />
            </CrudDialog>
        </PageFrame>
    }
}
