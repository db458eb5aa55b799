//! UI Components
//!
//! Leptos components rendering the camera table.

mod camera_row;
mod camera_table;
mod delete_confirm_button;
mod filter_bar;
mod pagination_bar;

pub use camera_row::CameraRow;
pub use camera_table::CameraTable;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::{FilterBar, SearchBox};
pub use pagination_bar::PaginationBar;
