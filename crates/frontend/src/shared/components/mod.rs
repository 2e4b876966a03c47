pub mod filter_select;
pub mod form_field;
pub mod list_status;
pub mod pagination_controls;
pub mod sortable_header;
pub mod stat_card;
