//! Order detail dialog with its line items and status transitions.

use contracts::domain::a006_order::{Order, OrderStatusUpdate};
use contracts::enums::order_status::OrderStatus;
use contracts::shared::api::ApiError;
use contracts::system::access::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_client::ApiClient;
use crate::shared::date_utils::format_datetime_id;
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_number_int, format_rupiah};
use crate::system::auth::context::use_session;

async fn update_status(client: ApiClient, id: i64, status: OrderStatus) -> Result<(), ApiError> {
    client
        .put_ack(&OrderStatusUpdate::path(id), &OrderStatusUpdate { status })
        .await
}

#[component]
pub fn OrderDetails(
    order: Order,
    on_close: Callback<()>,
    /// Fired after a successful status change
    on_updated: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let id = order.id_pesanan;
    let status = order.order_status();
    let transitions = status.map(|s| s.next_statuses()).unwrap_or_default();
    let can_process = session.can(Capability::ProcessOrders);

    let change_status = move |next: OrderStatus| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        let client = session.client();
        spawn_local(async move {
            let result = update_status(client, id, next).await;
            set_busy.set(false);
            match result {
                Ok(()) => {
                    log::info!("order {} -> {}", id, next.code());
                    on_updated.run(());
                }
                Err(e) => {
                    log::warn!("order status update failed: {}", e);
                    if e == ApiError::Unauthenticated {
                        session.expire();
                    }
                    set_error.set(Some(format!("Gagal mengubah status: {}", e.user_message())));
                }
            }
        });
    };

    let title = format!("Pesanan {}", order.kode_pesanan.clone().unwrap_or_else(|| format!("#{}", id)));

    view! {
        <Modal title=title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-grid">
                <div class="details-grid__label">"Pelanggan"</div>
                <div>{order.nama_pelanggan.clone().unwrap_or_else(|| "-".to_string())}</div>
                <div class="details-grid__label">"Waktu"</div>
                <div>{order.created_at.as_deref().map(format_datetime_id).unwrap_or_else(|| "-".to_string())}</div>
                <div class="details-grid__label">"Cabang"</div>
                <div>{order.branch_name().to_string()}</div>
                <div class="details-grid__label">"Status"</div>
                <div>
                    {match status {
                        Some(s) => view! { <span class=s.badge_class()>{s.display_name()}</span> }.into_any(),
                        None => view! { <span class="badge badge--neutral">{order.status.clone().unwrap_or_default()}</span> }.into_any(),
                    }}
                </div>
                {order.catatan.clone().filter(|c| !c.trim().is_empty()).map(|c| view! {
                    <div class="details-grid__label">"Catatan"</div>
                    <div>{c}</div>
                })}
            </div>

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Produk"</TableHeaderCell>
                        <TableHeaderCell>"Jumlah"</TableHeaderCell>
                        <TableHeaderCell>"Harga"</TableHeaderCell>
                        <TableHeaderCell>"Subtotal"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {order.items.iter().map(|item| {
                        let nama = item.nama_produk.clone().unwrap_or_else(|| "-".to_string());
                        let jumlah = format_number_int(item.jumlah as f64);
                        let harga = format_rupiah(item.harga);
                        let subtotal = format_rupiah(item.subtotal);
                        view! {
                            <TableRow>
                                <TableCell>{nama}</TableCell>
                                <TableCell>{jumlah}</TableCell>
                                <TableCell>{harga}</TableCell>
                                <TableCell>{subtotal}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
            <div class="details-total">
                "Total: "
                <strong>{format_rupiah(order.total)}</strong>
            </div>

            {(can_process && !transitions.is_empty()).then(|| view! {
                <div class="details-actions">
                    <span class="details-actions__label">"Ubah status:"</span>
                    {transitions.into_iter().map(|next| view! {
                        <Button
                            appearance=if next == OrderStatus::Dibatalkan {
                                ButtonAppearance::Secondary
                            } else {
                                ButtonAppearance::Primary
                            }
                            on_click=move |_| change_status(next)
                            disabled=busy
                        >
                            {next.display_name()}
                        </Button>
                    }).collect_view()}
                </div>
            })}
        </Modal>
    }
}
