//! CLI command handlers, one file per command.

mod completions;
mod config_path;
mod output_dir;
mod repository_url;
mod show;

pub use completions::run_completions;
pub use config_path::run_config_path;
pub use output_dir::run_output_dir;
pub use repository_url::run_repository_url;
pub use show::run_show;
