pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod form_state;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod pagination;
pub mod remote_list;
