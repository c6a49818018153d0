pub mod api_utils;
pub mod components;
pub mod icons;
pub mod list_view;
pub mod lookups;
pub mod modal;
pub mod view_state;
