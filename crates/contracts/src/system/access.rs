//! Declarative role => capability table.
//!
//! Every role-gated element of the dashboard asks `Role::can` instead of
//! comparing role strings inline.

use serde::{Deserialize, Serialize};

use super::auth::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    ManageBranches,
    SwitchBranch,
    ManageEmployees,
    ManageCashiers,
    ViewProducts,
    ManageProducts,
    ManageExpenses,
    ViewOrders,
    ProcessOrders,
    ViewTransactions,
    ViewReports,
    ExportData,
    ViewAuditLog,
}

impl Capability {
    pub fn all() -> Vec<Capability> {
        vec![
            Capability::ManageBranches,
            Capability::SwitchBranch,
            Capability::ManageEmployees,
            Capability::ManageCashiers,
            Capability::ViewProducts,
            Capability::ManageProducts,
            Capability::ManageExpenses,
            Capability::ViewOrders,
            Capability::ProcessOrders,
            Capability::ViewTransactions,
            Capability::ViewReports,
            Capability::ExportData,
            Capability::ViewAuditLog,
        ]
    }
}

impl Role {
    pub fn can(&self, capability: Capability) -> bool {
        use Capability::*;
        match self {
            Role::SuperAdmin => true,
            Role::Admin => matches!(
                capability,
                ManageEmployees
                    | ManageCashiers
                    | ViewProducts
                    | ManageProducts
                    | ManageExpenses
                    | ViewOrders
                    | ProcessOrders
                    | ViewTransactions
                    | ViewReports
                    | ExportData
            ),
            Role::Kasir => matches!(
                capability,
                ViewProducts | ViewOrders | ProcessOrders | ViewTransactions
            ),
        }
    }
}

/// Missing or unknown role grants nothing
pub fn can(role: Option<Role>, capability: Capability) -> bool {
    role.map(|r| r.can(capability)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_has_every_capability() {
        assert!(Capability::all().into_iter().all(|c| Role::SuperAdmin.can(c)));
    }

    #[test]
    fn branch_admin_is_scoped() {
        assert!(Role::Admin.can(Capability::ManageEmployees));
        assert!(Role::Admin.can(Capability::ExportData));
        assert!(!Role::Admin.can(Capability::ManageBranches));
        assert!(!Role::Admin.can(Capability::SwitchBranch));
        assert!(!Role::Admin.can(Capability::ViewAuditLog));
    }

    #[test]
    fn cashier_is_read_mostly() {
        assert!(Role::Kasir.can(Capability::ViewProducts));
        assert!(Role::Kasir.can(Capability::ProcessOrders));
        assert!(!Role::Kasir.can(Capability::ManageProducts));
        assert!(!Role::Kasir.can(Capability::ViewReports));
        assert!(!Role::Kasir.can(Capability::ExportData));
    }

    #[test]
    fn unknown_role_grants_nothing() {
        assert!(Capability::all().into_iter().all(|c| !can(None, c)));
    }
}
