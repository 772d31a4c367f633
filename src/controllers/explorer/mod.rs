mod command;
mod controller;
mod errors;
mod limits;
mod navigation;

pub use command::{Direction, NavigationCommand, ParseNavigationCommandError};
pub use controller::{ExplorerController, RenderReport};
pub use errors::ExplorerError;
pub use limits::NavigationLimits;
pub use navigation::navigate;
