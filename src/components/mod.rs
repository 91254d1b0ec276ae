pub mod app;
pub mod camera_controls;
pub mod canvas_view;
pub mod catalog_panel;
pub mod code_block;
pub mod detail_modal;
pub mod install_instructions;
pub mod preview_frame;
pub mod preview_tile;
pub mod theme_toggle;
