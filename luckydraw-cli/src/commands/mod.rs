pub mod config;
pub mod draw;
pub mod interactive;
pub mod languages;

pub use config::{handle_config_command, ConfigCommands};
pub use draw::{handle_draw_command, DrawArgs};
pub use interactive::run_interactive;
pub use languages::list_languages;
