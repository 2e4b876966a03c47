use leptos::prelude::*;

use crate::domain::a008_audit_log::AuditLogFilters;

pub fn create_state() -> RwSignal<AuditLogFilters> {
    RwSignal::new(AuditLogFilters::default())
}
