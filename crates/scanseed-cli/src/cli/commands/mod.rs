//! CLI command handlers. Each command is in its own file.

mod completions;
mod config;
mod man;
mod nmap;

pub use completions::run_completions;
pub use config::run_config;
pub use man::run_man;
pub use nmap::{run_nmap, NmapArgs};
