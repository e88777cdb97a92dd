//! Static site generator for a personal portfolio and CV.

mod assets;
pub mod components;
mod config;
pub mod content;
mod generators;
pub mod logger;
pub mod markdown;
pub mod pages;
mod path;
mod sitemap;
mod util;

pub use assets::write_css_assets;
pub use config::Config;
pub use content::{Post, Site, load_posts};
pub use generators::{BuildSummary, generate_site};
pub use markdown::{ComponentMap, MarkdownRenderer, Props};
pub use path::{calculate_depth, route_file};
pub use sitemap::generate_sitemap;
pub use util::{date_range, format_date};
