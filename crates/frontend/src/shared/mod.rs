pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod history;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod request_seq;
pub mod validation;
