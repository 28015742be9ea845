pub mod components;
pub mod export;
pub mod icons;
pub mod page_context;
