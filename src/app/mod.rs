pub mod cli;
pub mod loader;
pub mod logging;
pub mod root_locator;

pub use loader::{ImagesLoader, RootSource};
pub use root_locator::locate_root;
