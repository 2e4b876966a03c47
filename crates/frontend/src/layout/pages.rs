//! Page registry: every dashboard page, the capability it needs and how it
//! is rendered.

use contracts::system::access::{can, Capability};
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::dashboards::d400_sales_report::ui::SalesReportPage;
use crate::domain::a001_branch::ui::list::BranchList;
use crate::domain::a002_employee::ui::list::EmployeeList;
use crate::domain::a003_cashier::ui::list::CashierList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_expense::ui::list::ExpenseList;
use crate::domain::a006_order::ui::list::OrderList;
use crate::domain::a007_transaction::ui::list::TransactionList;
use crate::domain::a008_audit_log::ui::list::AuditLogList;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub group: &'static str,
    pub capability: Capability,
}

pub const GROUP_OVERVIEW: &str = "Ringkasan";
pub const GROUP_MASTER: &str = "Data Master";
pub const GROUP_OPERATIONS: &str = "Operasional";
pub const GROUP_SYSTEM: &str = "Sistem";

pub const PAGES: &[PageEntry] = &[
    PageEntry {
        key: "d400_sales_report",
        label: "Laporan Penjualan",
        icon: "bar-chart",
        group: GROUP_OVERVIEW,
        capability: Capability::ViewReports,
    },
    PageEntry {
        key: "a001_branch",
        label: "Cabang",
        icon: "building",
        group: GROUP_MASTER,
        capability: Capability::ManageBranches,
    },
    PageEntry {
        key: "a002_employee",
        label: "Karyawan",
        icon: "users",
        group: GROUP_MASTER,
        capability: Capability::ManageEmployees,
    },
    PageEntry {
        key: "a003_cashier",
        label: "Akun Kasir",
        icon: "user",
        group: GROUP_MASTER,
        capability: Capability::ManageCashiers,
    },
    PageEntry {
        key: "a004_product",
        label: "Produk",
        icon: "products",
        group: GROUP_MASTER,
        capability: Capability::ViewProducts,
    },
    PageEntry {
        key: "a006_order",
        label: "Pesanan",
        icon: "orders",
        group: GROUP_OPERATIONS,
        capability: Capability::ViewOrders,
    },
    PageEntry {
        key: "a007_transaction",
        label: "Riwayat Transaksi",
        icon: "receipt",
        group: GROUP_OPERATIONS,
        capability: Capability::ViewTransactions,
    },
    PageEntry {
        key: "a005_expense",
        label: "Pengeluaran",
        icon: "wallet",
        group: GROUP_OPERATIONS,
        capability: Capability::ManageExpenses,
    },
    PageEntry {
        key: "a008_audit_log",
        label: "Audit Log",
        icon: "history",
        group: GROUP_SYSTEM,
        capability: Capability::ViewAuditLog,
    },
];

pub const GROUPS: &[&str] = &[GROUP_OVERVIEW, GROUP_MASTER, GROUP_OPERATIONS, GROUP_SYSTEM];

pub fn find_page(key: &str) -> Option<&'static PageEntry> {
    PAGES.iter().find(|p| p.key == key)
}

/// Pages the role may open, in menu order
pub fn visible_pages(role: Option<Role>) -> Vec<&'static PageEntry> {
    PAGES.iter().filter(|p| can(role, p.capability)).collect()
}

/// Landing page for a role
pub fn default_page(role: Option<Role>) -> Option<&'static str> {
    visible_pages(role).first().map(|p| p.key)
}

/// Page key to show: the requested one if the role may open it, otherwise
/// the role's landing page
pub fn resolve_page(requested: Option<&str>, role: Option<Role>) -> Option<&'static str> {
    requested
        .and_then(find_page)
        .filter(|p| can(role, p.capability))
        .map(|p| p.key)
        .or_else(|| default_page(role))
}

pub fn render_page(key: &str) -> AnyView {
    match key {
        "d400_sales_report" => view! { <SalesReportPage /> }.into_any(),
        "a001_branch" => view! { <BranchList /> }.into_any(),
        "a002_employee" => view! { <EmployeeList /> }.into_any(),
        "a003_cashier" => view! { <CashierList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_expense" => view! { <ExpenseList /> }.into_any(),
        "a006_order" => view! { <OrderList /> }.into_any(),
        "a007_transaction" => view! { <TransactionList /> }.into_any(),
        "a008_audit_log" => view! { <AuditLogList /> }.into_any(),
        _ => view! { <div class="page-not-found">"Halaman tidak ditemukan"</div> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_sees_everything() {
        assert_eq!(visible_pages(Some(Role::SuperAdmin)).len(), PAGES.len());
        assert_eq!(default_page(Some(Role::SuperAdmin)), Some("d400_sales_report"));
    }

    #[test]
    fn cashier_menu_is_limited() {
        let keys: Vec<&str> = visible_pages(Some(Role::Kasir)).iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["a004_product", "a006_order", "a007_transaction"]);
        assert_eq!(default_page(Some(Role::Kasir)), Some("a004_product"));
    }

    #[test]
    fn forbidden_page_falls_back_to_landing() {
        assert_eq!(
            resolve_page(Some("a008_audit_log"), Some(Role::Admin)),
            Some("d400_sales_report")
        );
        assert_eq!(resolve_page(Some("a005_expense"), Some(Role::Admin)), Some("a005_expense"));
        assert_eq!(resolve_page(Some("nope"), Some(Role::Kasir)), Some("a004_product"));
        assert_eq!(resolve_page(None, None), None);
    }

    #[test]
    fn every_page_has_a_known_group() {
        assert!(PAGES.iter().all(|p| GROUPS.contains(&p.group)));
    }
}
