pub mod ui;

use contracts::domain::a008_audit_log::AuditLogQuery;
use contracts::shared::api::ServerPagination;

use crate::shared::list_utils::FILTER_ALL;
use crate::shared::pagination::{server_page_overshoot, ITEMS_PER_PAGE};

pub const AUDIT_LOG_PER_PAGE: usize = ITEMS_PER_PAGE;

/// Audit log filters, applied by the server
#[derive(Clone, Debug, PartialEq)]
pub struct AuditLogFilters {
    pub search: String,
    pub action: String,
    pub module: String,
    pub page: usize,
}

impl Default for AuditLogFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            action: FILTER_ALL.to_string(),
            module: FILTER_ALL.to_string(),
            page: 1,
        }
    }
}

fn selected(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty() && value != FILTER_ALL).then(|| value.to_string())
}

impl AuditLogFilters {
    pub fn is_active(&self) -> bool {
        selected(&self.search).is_some() || selected(&self.action).is_some() || selected(&self.module).is_some()
    }

    pub fn to_query(&self, per_page: usize) -> AuditLogQuery {
        AuditLogQuery {
            page: self.page.max(1) as u32,
            per_page: per_page as u32,
            search: selected(&self.search),
            aksi: selected(&self.action),
            modul: selected(&self.module),
        }
    }

    /// Applies a filter change and goes back to page 1
    pub fn update(&mut self, change: impl FnOnce(&mut Self)) {
        change(self);
        self.page = 1;
    }

    /// Returns true when the requested page was past the server's last page
    /// and has been moved back onto it
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_send_only_paging() {
        let query = AuditLogFilters::default().to_query(AUDIT_LOG_PER_PAGE);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page as usize, AUDIT_LOG_PER_PAGE);
        assert_eq!(query.aksi, None);
        assert_eq!(query.modul, None);
        assert_eq!(query.search, None);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut filters = AuditLogFilters {
            page: 3,
            ..AuditLogFilters::default()
        };
        filters.update(|f| f.action = "delete".into());
        assert_eq!(filters.page, 1);
        assert!(filters.is_active());
        assert_eq!(filters.to_query(10).aksi.as_deref(), Some("delete"));
    }

    #[test]
    fn paging_keeps_filters() {
        let mut filters = AuditLogFilters::default();
        filters.update(|f| f.module = "produk".into());
        filters.page = 2;
        let query = filters.to_query(10);
        assert_eq!(query.page, 2);
        assert_eq!(query.modul.as_deref(), Some("produk"));
    }

    #[test]
    fn shrunken_log_moves_back_to_last_page() {
        let mut filters = AuditLogFilters {
            page: 7,
            ..AuditLogFilters::default()
        };
        let pagination = ServerPagination {
            current_page: 7,
            last_page: 3,
            per_page: 10,
            total: 25,
        };
        assert!(filters.clamp_to(&pagination));
        assert_eq!(filters.to_query(10).page, 3);
        assert!(!filters.clamp_to(&ServerPagination {
            current_page: 3,
            ..pagination
        }));
    }
}
