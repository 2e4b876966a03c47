pub mod ui;

use contracts::domain::a007_transaction::{Transaction, TransactionQuery};
use contracts::domain::common::Resource;
use contracts::enums::payment_method::PaymentMethodLabel;
use contracts::shared::api::{ApiError, ServerPagination};

use crate::shared::date_utils::format_datetime_id;
use crate::shared::api_client::ApiClient;
use crate::shared::export::SpreadsheetExportable;
use crate::shared::list_utils::FILTER_ALL;
use crate::shared::number_format::format_number_int;
use crate::shared::pagination::{next_server_page, server_page_overshoot, ITEMS_PER_PAGE};

/// Filters of the transaction history. They are sent to the server so they
/// cover every page, not only the one on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionFilters {
    pub search: String,
    pub payment_method: String,
    pub start_date: String,
    pub end_date: String,
    pub page: usize,
}

impl Default for TransactionFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            payment_method: FILTER_ALL.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            page: 1,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == FILTER_ALL {
        None
    } else {
        Some(value.to_string())
    }
}

impl TransactionFilters {
    pub fn is_active(&self) -> bool {
        non_empty(&self.search).is_some()
            || non_empty(&self.payment_method).is_some()
            || !self.start_date.is_empty()
            || !self.end_date.is_empty()
    }

    pub fn to_query(&self, branch: Option<i64>, per_page: usize) -> TransactionQuery {
        TransactionQuery {
            page: self.page.max(1) as u32,
            per_page: per_page as u32,
            search: non_empty(&self.search),
            metode_pembayaran: non_empty(&self.payment_method),
            start_date: non_empty(&self.start_date),
            end_date: non_empty(&self.end_date),
            id_cabang: branch,
        }
    }

    /// Every filter change starts again from the first page
    pub fn update(&mut self, change: impl FnOnce(&mut Self)) {
        change(self);
        self.page = 1;
    }

    /// Branch scope changed; the old page number means nothing there
    pub fn rescope(&mut self) {
        self.page = 1;
    }

    /// Steps back to the server's last page when the requested one no
    /// longer exists. Returns true when the page changed.
    pub fn clamp_to(&mut self, pagination: &ServerPagination) -> bool {
        match server_page_overshoot(pagination.current_page as usize, pagination.last_page as usize) {
            Some(page) if page != self.page => {
                self.page = page;
                true
            }
            _ => false,
        }
    }
}

pub const TRANSACTIONS_PER_PAGE: usize = ITEMS_PER_PAGE;

/// Rows requested per page while collecting a spreadsheet export
pub const EXPORT_PAGE_SIZE: usize = 1000;

/// Page to fetch after `requested` during an export walk. Stops at the last
/// page, on an empty page, or when the server does not advance.
pub fn next_export_page(
    requested: u32,
    fetched: usize,
    pagination: Option<&ServerPagination>,
) -> Option<u32> {
    let pagination = pagination?;
    if fetched == 0 {
        return None;
    }
    next_server_page(pagination.current_page as usize, pagination.last_page as usize)
        .map(|next| next as u32)
        .filter(|next| *next > requested)
}

/// Every transaction matching `query`, across all server pages
pub async fn fetch_for_export(
    client: &ApiClient,
    mut query: TransactionQuery,
) -> Result<Vec<Transaction>, ApiError> {
    let mut rows = Vec::new();
    query.page = 1;
    query.per_page = EXPORT_PAGE_SIZE as u32;
    loop {
        let page = client
            .get_page::<Transaction, _>(&Transaction::collection_path(), &query)
            .await?;
        let next = next_export_page(query.page, page.items.len(), page.pagination.as_ref());
        rows.extend(page.items);
        match next {
            Some(next) => query.page = next,
            None => return Ok(rows),
        }
    }
}

impl SpreadsheetExportable for Transaction {
    fn headers() -> Vec<&'static str> {
        vec![
            "Kode Transaksi",
            "Tanggal",
            "Kasir",
            "Cabang",
            "Metode Pembayaran",
            "Total",
            "Bayar",
            "Kembalian",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.kode_transaksi.clone().unwrap_or_default(),
            format_datetime_id(self.timestamp()),
            self.cashier_name().to_string(),
            self.branch_name().to_string(),
            PaymentMethodLabel::from_code(self.metode_pembayaran.as_deref().unwrap_or("")).label,
            format_number_int(self.total),
            self.bayar.map(format_number_int).unwrap_or_default(),
            self.kembalian.map(format_number_int).unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_all_filters_are_not_sent() {
        let filters = TransactionFilters {
            search: "  ".into(),
            ..TransactionFilters::default()
        };
        let query = filters.to_query(None, 10);
        assert_eq!(query.search, None);
        assert_eq!(query.metode_pembayaran, None);
        assert_eq!(query.page, 1);
        assert!(!filters.is_active());
    }

    #[test]
    fn query_carries_filters_and_scope() {
        let mut filters = TransactionFilters::default();
        filters.page = 4;
        filters.update(|f| {
            f.payment_method = "qris".into();
            f.start_date = "2026-10-01".into();
        });
        let query = filters.to_query(Some(2), 10);
        assert_eq!(query.page, 1);
        assert_eq!(query.metode_pembayaran.as_deref(), Some("qris"));
        assert_eq!(query.start_date.as_deref(), Some("2026-10-01"));
        assert_eq!(query.id_cabang, Some(2));
    }

    #[test]
    fn csv_row_labels_payment_method() {
        let trx: Transaction = serde_json::from_str(
            r#"{"id_transaksi":1,"kode_transaksi":"TRX-1","metode_pembayaran":"e-wallet",
                "total":25000,"bayar":30000,"kembalian":5000,"tanggal":"2026-10-18 14:05:00"}"#,
        )
        .unwrap();
        let row = trx.to_csv_row();
        assert_eq!(row[1], "18 Oktober 2026, 14:05");
        assert_eq!(row[4], "QRIS");
        assert_eq!(row[5], "25.000");
        assert_eq!(row[7], "5.000");
    }

    fn meta(current_page: u32, last_page: u32) -> ServerPagination {
        ServerPagination {
            current_page,
            last_page,
            per_page: 10,
            total: last_page as u64 * 10,
        }
    }

    #[test]
    fn branch_switch_returns_to_first_page() {
        let mut filters = TransactionFilters {
            page: 5,
            ..TransactionFilters::default()
        };
        filters.rescope();
        assert_eq!(filters.to_query(Some(2), 10).page, 1);
    }

    #[test]
    fn page_past_the_end_is_clamped_to_last_page() {
        let mut filters = TransactionFilters {
            page: 5,
            ..TransactionFilters::default()
        };
        assert!(filters.clamp_to(&meta(5, 2)));
        assert_eq!(filters.page, 2);
        assert!(!filters.clamp_to(&meta(2, 2)));

        // everything filtered away: page 1 of an empty result
        filters.page = 3;
        assert!(filters.clamp_to(&meta(3, 0)));
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn export_walks_every_page() {
        let mut requested = 1;
        let mut pages_fetched = 1;
        while let Some(next) = next_export_page(requested, 1000, Some(&meta(requested, 3))) {
            requested = next;
            pages_fetched += 1;
        }
        assert_eq!(pages_fetched, 3);
        assert_eq!(requested, 3);
    }

    #[test]
    fn export_stops_when_nothing_more_comes_back() {
        assert_eq!(next_export_page(1, 1000, None), None);
        assert_eq!(next_export_page(2, 0, Some(&meta(2, 5))), None);
        // server ignores the page parameter and keeps answering page 1
        assert_eq!(next_export_page(2, 1000, Some(&meta(1, 5))), None);
    }
}
