pub mod components;
pub mod date_utils;
pub mod dom;
pub mod export;
pub mod grid;
pub mod icons;
pub mod layout_storage;
