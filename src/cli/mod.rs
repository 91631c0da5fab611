pub mod commands;
pub mod menu;

pub use commands::run;
pub use menu::{MenuChoice, run_menu};
