use contracts::domain::a007_transaction::Transaction;
use contracts::enums::payment_method::PaymentMethodLabel;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_datetime_id;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_number_int, format_rupiah};

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Read-only receipt view of a transaction
#[component]
pub fn TransactionDetails(transaction: Transaction, on_close: Callback<()>) -> impl IntoView {
    let payment = PaymentMethodLabel::from_code(transaction.metode_pembayaran.as_deref().unwrap_or(""));
    let title = format!(
        "Transaksi {}",
        transaction
            .kode_transaksi
            .clone()
            .unwrap_or_else(|| format!("#{}", transaction.id_transaksi))
    );

    view! {
        <Modal title=title on_close=on_close>
            <div class="details-grid">
                <div class="details-grid__label">"Waktu"</div>
                <div>{format_datetime_id(transaction.timestamp())}</div>
                <div class="details-grid__label">"Kasir"</div>
                <div>{or_dash(transaction.cashier_name())}</div>
                <div class="details-grid__label">"Cabang"</div>
                <div>{or_dash(transaction.branch_name())}</div>
                <div class="details-grid__label">"Pembayaran"</div>
                <div class="payment-method">{icon(payment.icon)}" "{payment.label.clone()}</div>
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
                    {transaction.items.iter().map(|item| {
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

            <div class="details-grid details-grid--totals">
                <div class="details-grid__label">"Total"</div>
                <div><strong>{format_rupiah(transaction.total)}</strong></div>
                <div class="details-grid__label">"Bayar"</div>
                <div>{transaction.bayar.map(format_rupiah).unwrap_or_else(|| "-".to_string())}</div>
                <div class="details-grid__label">"Kembalian"</div>
                <div>{transaction.kembalian.map(format_rupiah).unwrap_or_else(|| "-".to_string())}</div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_render_as_dash() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("Dewi"), "Dewi");
    }
}
