use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_sale::ui::details::SaleDetails;
use crate::shared::crud::{CrudDialog, CrudListViewModel, CrudPageHeader, CrudTableBody, RowActions};
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
#[allow(non_snake_case)]
pub fn SaleList() -> impl IntoView {
    let vm = CrudListViewModel::<Sale>::new();
    vm.load();

    view! {
        <PageFrame page_id="a002_sale--list" category=PAGE_CAT_LIST>
            <CrudPageHeader vm=vm />

            <div class="page__content">
                <CrudTableBody vm=vm>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Fruta"</TableHeaderCell>
                                <TableHeaderCell>"Quantidade"</TableHeaderCell>
                                <TableHeaderCell>"Valor"</TableHeaderCell>
                                <TableHeaderCell>"Loja"</TableHeaderCell>
                                <TableHeaderCell>"Data"</TableHeaderCell>
                                <TableHeaderCell>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || vm.state.with(|s| s.rows())
                                key=|(key, _)| *key
                                children=move |(_, sale)| {
                                    let id = sale.id();
                                    let value = sale.value_display();
                                    let date = format_date(&sale.created_at);
                                    let fruit = sale.fruit;
                                    let quantity = sale.quantity;
                                    let store_id = sale.store_id;
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
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {value}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{store}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{date}</TableCellLayout>
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
                <SaleDetails vm=vm />
            </CrudDialog>
        </PageFrame>
    }
}
