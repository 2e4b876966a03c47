mod state;

use contracts::domain::a006_order::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use thaw::*;

use super::details::OrderDetails;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::list_status::{empty_hint, ErrorBanner, ListBody};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeader;
use crate::shared::date_utils::format_datetime_id;
use crate::shared::icons::icon;
use crate::shared::list_utils::{derive_page_with, sort_by_date_desc, sort_list, SearchInput, FILTER_ALL};
use crate::shared::modal::ModalState;
use crate::shared::number_format::format_rupiah;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_list::RemoteList;
use crate::system::auth::context::use_session;
use state::create_state;

#[component]
pub fn OrderList() -> impl IntoView {
    let session = use_session();
    let orders = RemoteList::<Order>::new("pesanan");
    let state = create_state();
    let modal = RwSignal::new(ModalState::<Order>::None);

    let load_data = move |scope: Option<i64>| {
        let client = session.client();
        orders.load(async move { client.fetch_all::<Order>(scope).await });
    };
    Effect::new(move |_| {
        let scope = session.branch_scope();
        state.update_untracked(|q| q.current_page = 1);
        load_data(scope);
    });
    let reload = move || load_data(session.branch_scope_untracked());

    let page = Memo::new(move |_| {
        orders.state.with(|s| {
            state.with(|q| {
                derive_page_with(&s.items, q, |rows| match q.sort_field.as_deref() {
                    Some(field) => sort_list(rows, field, q.sort_ascending),
                    None => sort_by_date_desc(rows),
                })
            })
        })
    });

    let status_options = std::iter::once((FILTER_ALL.to_string(), "Semua Status".to_string()))
        .chain(
            OrderStatus::all()
                .into_iter()
                .map(|s| (s.code().to_string(), s.display_name().to_string())),
        )
        .collect::<Vec<_>>();

    let close_modal = Callback::new(move |_| modal.set(ModalState::None));
    let after_update = Callback::new(move |_| {
        modal.set(ModalState::None);
        reload();
    });

    let is_empty = Signal::derive(move || page.with(|p| p.filtered_count == 0));
    let empty_text = Signal::derive(move || {
        let filtered = state.with(|q| !q.search_term.trim().is_empty() || q.filters.is_active());
        empty_hint(filtered, "pesanan")
    });

    view! {
        <PageFrame page_id="a006_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pesanan"</h1>
                    <Badge>{move || page.with(|p| p.filtered_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=Signal::derive(move || orders.loading())
                    >
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    message=Signal::derive(move || orders.error())
                    on_retry=Callback::new(move |_| reload())
                />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <SearchInput
                                value=Signal::derive(move || state.with(|q| q.search_term.clone()))
                                on_change=Callback::new(move |term: String| state.update(|q| q.set_search(term)))
                                placeholder="Cari kode pesanan atau pelanggan..."
                            />
                        </div>
                        <FilterSelect
                            label="Status"
                            value=Signal::derive(move || state.with(|q| q.filters.get("status").to_string()))
                            on_change=Callback::new(move |v: String| state.update(|q| q.set_filter("status", v)))
                            options=status_options
                        />
                    </Flex>
                </div>

                <ListBody
                    loading=Signal::derive(move || orders.loading())
                    is_empty=is_empty
                    empty_text=empty_text
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeader label="Kode" field="kode_pesanan" state=state />
                                    <SortableHeader label="Pelanggan" field="nama_pelanggan" state=state min_width=160.0 />
                                    <SortableHeader label="Waktu" field="created_at" state=state min_width=160.0 />
                                    <TableHeaderCell min_width=80.0>"Item"</TableHeaderCell>
                                    <SortableHeader label="Total" field="total" state=state />
                                    <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                    <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    page.get()
                                        .visible_items
                                        .into_iter()
                                        .map(|order| {
                                            let for_view = order.clone();
                                            let status = order.order_status();
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span style="font-weight: 500;">{order.kode_pesanan.clone().unwrap_or_else(|| "-".to_string())}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{order.nama_pelanggan.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {order.created_at.as_deref().map(format_datetime_id).unwrap_or_else(|| "-".to_string())}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{order.items.len().to_string()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="table__number">{format_rupiah(order.total)}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {match status {
                                                                Some(s) => view! { <span class=s.badge_class()>{s.display_name()}</span> }.into_any(),
                                                                None => view! { <span class="badge badge--neutral">{order.status.clone().unwrap_or_else(|| "-".to_string())}</span> }.into_any(),
                                                            }}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| modal.set(ModalState::View(for_view.clone()))
                                                            attr:title="Detail"
                                                        >
                                                            {icon("eye")}
                                                        </Button>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                    <PaginationControls
                        window=Signal::derive(move || page.with(|p| p.window.clone()))
                        pages=Signal::derive(move || page.with(|p| p.page_numbers.clone()))
                        on_page_change=Callback::new(move |n| {
                            let total = page.with_untracked(|p| p.total_pages());
                            state.update(|q| {
                                q.go_to(n, total);
                            });
                        })
                    />
                </ListBody>
            </div>

            {move || match modal.get() {
                ModalState::View(order) => view! {
                    <OrderDetails order=order on_close=close_modal on_updated=after_update />
                }
                .into_any(),
                _ => view! { <></> }.into_any(),
            }}
        </PageFrame>
    }
}
