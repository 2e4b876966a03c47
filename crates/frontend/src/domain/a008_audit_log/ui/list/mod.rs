mod state;

use contracts::domain::a008_audit_log::{AuditLog, AUDIT_ACTIONS, AUDIT_MODULES};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_audit_log::AUDIT_LOG_PER_PAGE;
use crate::shared::components::filter_select::{filter_options, FilterSelect};
use crate::shared::components::list_status::{empty_hint, ErrorBanner, ListBody};
use crate::shared::components::pagination_controls::ServerPaginationControls;
use crate::shared::date_utils::format_datetime_id;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_list::RemoteList;
use crate::system::auth::context::use_session;
use state::create_state;

#[component]
pub fn AuditLogList() -> impl IntoView {
    let session = use_session();
    let logs = RemoteList::<AuditLog>::new("audit log");
    let filters = create_state();

    let load_page = move || {
        let query = filters.with_untracked(|f| f.to_query(AUDIT_LOG_PER_PAGE));
        let client = session.client();
        logs.load(async move {
            client
                .get_page::<AuditLog, _>(&AuditLog::collection_path(), &query)
                .await
        });
    };

    Effect::new(move |_| {
        filters.track();
        load_page();
    });

    // Rows went away since the page was picked: fall back to the last page
    Effect::new(move |_| {
        let Some(pagination) = logs.pagination() else {
            return;
        };
        let mut next = filters.get_untracked();
        if next.page == pagination.current_page as usize && next.clamp_to(&pagination) {
            filters.set(next);
        }
    });

    let total_items = Signal::derive(move || {
        logs.state.with(|s| match &s.pagination {
            Some(p) => p.total as usize,
            None => s.items.len(),
        })
    });
    let total_pages = Signal::derive(move || logs.pagination().map(|p| p.last_page.max(1) as usize).unwrap_or(1));
    let current_page = Signal::derive(move || {
        logs.pagination()
            .map(|p| p.current_page.max(1) as usize)
            .unwrap_or_else(|| filters.with(|f| f.page))
    });
    let per_page = Signal::derive(move || {
        logs.pagination()
            .map(|p| p.per_page.max(1) as usize)
            .unwrap_or(AUDIT_LOG_PER_PAGE)
    });

    view! {
        <PageFrame page_id="a008_audit_log--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Audit Log"</h1>
                    <Badge>{move || total_items.get().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_page()
                        disabled=Signal::derive(move || logs.loading())
                    >
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    message=Signal::derive(move || logs.error())
                    on_retry=Callback::new(move |_| load_page())
                />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <SearchInput
                                value=Signal::derive(move || filters.with(|f| f.search.clone()))
                                on_change=Callback::new(move |term: String| filters.update(|f| f.update(|f| f.search = term)))
                                placeholder="Cari deskripsi atau pengguna..."
                            />
                        </div>
                        <FilterSelect
                            label="Aksi"
                            value=Signal::derive(move || filters.with(|f| f.action.clone()))
                            on_change=Callback::new(move |v: String| filters.update(|f| f.update(|f| f.action = v)))
                            options=filter_options("Semua Aksi", AUDIT_ACTIONS)
                        />
                        <FilterSelect
                            label="Modul"
                            value=Signal::derive(move || filters.with(|f| f.module.clone()))
                            on_change=Callback::new(move |v: String| filters.update(|f| f.update(|f| f.module = v)))
                            options=filter_options("Semua Modul", AUDIT_MODULES)
                        />
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| filters.set(Default::default())
                        >
                            "Reset"
                        </Button>
                    </Flex>
                </div>

                <ListBody
                    loading=Signal::derive(move || logs.loading())
                    is_empty=Signal::derive(move || logs.state.with(|s| s.items.is_empty()))
                    empty_text=Signal::derive(move || empty_hint(filters.with(|f| f.is_active()), "aktivitas"))
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=160.0>"Waktu"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>"Pengguna"</TableHeaderCell>
                                    <TableHeaderCell min_width=90.0>"Aksi"</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>"Modul"</TableHeaderCell>
                                    <TableHeaderCell min_width=240.0>"Deskripsi"</TableHeaderCell>
                                    <TableHeaderCell min_width=110.0>"IP"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    logs.items()
                                        .into_iter()
                                        .map(|log| {
                                            let badge = log.action_badge_class();
                                            let created = format_datetime_id(log.created_at.as_deref().unwrap_or(""));
                                            let user = log.user_name().to_string();
                                            let aksi = log.aksi.clone().unwrap_or_default();
                                            let modul = log.modul.clone().unwrap_or_default();
                                            let deskripsi = log.deskripsi.clone().unwrap_or_default();
                                            let ip = log.ip_address.clone().unwrap_or_else(|| "-".to_string());
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {created}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{user}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <span class=badge>{aksi}</span>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{modul}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{deskripsi}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <code>{ip}</code>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                    <ServerPaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        total_items=total_items
                        per_page=per_page
                        on_page_change=Callback::new(move |n| filters.update(|f| f.page = n))
                    />
                </ListBody>
            </div>
        </PageFrame>
    }
}
