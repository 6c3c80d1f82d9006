//! The SideNav controller: panel state machine, drags, settles, and content.

mod content;
mod drag;
mod routing;
mod transitions;
mod types;

pub use types::*;
