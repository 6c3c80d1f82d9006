pub mod errors;
pub mod side;
pub mod types;

pub use errors::{ConfigError, SideNavError};
pub use side::PanelSide;
pub use types::{Color, Point, Rect, Size};

pub type Result<T> = std::result::Result<T, SideNavError>;
