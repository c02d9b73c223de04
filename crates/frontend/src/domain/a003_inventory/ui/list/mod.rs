use contracts::domain::a003_inventory::aggregate::InventoryItem;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_inventory::ui::details::InventoryDetails;
use crate::shared::crud::{CrudDialog, CrudListViewModel, CrudPageHeader, CrudTableBody, RowActions};
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Inventory of every store, fetched store by store
#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let vm = CrudListViewModel::<InventoryItem>::new();
    vm.load();

    view! {
        <PageFrame page_id="a003_inventory--list" category=PAGE_CAT_LIST>
            <CrudPageHeader vm=vm />

            <div class="page__content">
                <CrudTableBody vm=vm>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Fruta"</TableHeaderCell>
                                <TableHeaderCell>"Quantidade"</TableHeaderCell>
                                <TableHeaderCell>"Unidade"</TableHeaderCell>
                                <TableHeaderCell>"Loja"</TableHeaderCell>
                                <TableHeaderCell>"Última Atualização"</TableHeaderCell>
                                <TableHeaderCell>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || vm.state.with(|s| s.rows())
                                key=|(key, _)| *key
                                children=move |(_, item)| {
                                    let id = item.id();
                                    let updated_at = format_datetime(&item.updated_at);
                                    let fruit = item.fruit;
                                    let quantity = item.quantity;
                                    let unit = item.unit;
                                    let store_id = item.store_id;
                                    let store = move || vm.state.with(|s| s.store_name(store_id));
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{fruit}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{unit}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{store}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{updated_at}</TableCellLayout>
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
                <InventoryDetails vm=vm />
            </CrudDialog>
        </PageFrame>
    }
}
