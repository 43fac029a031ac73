pub mod app;
pub mod layout;
pub mod modal;

pub use app::App;
pub use layout::Layout;
pub use modal::Modal;
