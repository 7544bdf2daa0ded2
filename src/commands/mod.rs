mod check;
mod context;
mod render;
mod themes;

pub use check::{run_check, run_check_impl};
pub use context::{apply_render_overrides, load_config, load_table, theme_name};
pub use render::{resolve_charts, run_render, run_render_impl};
pub use themes::{format_themes, run_themes};
