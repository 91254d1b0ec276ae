pub mod camera;
pub mod layout;
pub mod modal;
pub mod theme;

pub use camera::{Camera, Rect, Viewport};
pub use layout::{MasonryLayout, masonry};
pub use modal::{DetailPhase, DetailTab, ModalState};
pub use theme::{Theme, ThemeStore};
