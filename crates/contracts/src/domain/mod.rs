pub mod a001_branch;
pub mod a002_employee;
pub mod a003_cashier;
pub mod a004_product;
pub mod a005_expense;
pub mod a006_order;
pub mod a007_transaction;
pub mod a008_audit_log;
pub mod common;
