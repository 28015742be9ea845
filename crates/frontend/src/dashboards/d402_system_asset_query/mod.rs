pub mod api;
pub mod controller;
pub mod render;
pub mod ui;
pub mod view_state;
