use anyhow::{Context, Result};
use folio::{Config, Site, generate_site, load_posts, logger};
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = Config::parse();
    logger::init_logger(config.verbose, config.quiet);
    config.validate().context("Invalid configuration")?;

    let mut site = Site::load(config.site_file()).context("Failed to load site content")?;
    if let Some(base_url) = &config.base_url {
        site = site.with_base_url(base_url);
    }

    let posts = load_posts(config.posts_dir(), config.drafts).context("Failed to load posts")?;
    info!(posts = posts.len(), drafts = config.drafts, "content loaded");

    let summary = generate_site(&site, &posts, &config.output).context("Failed to generate site")?;

    let index_path = config.output.join("index.html");
    info!(
        "Generated {} pages: {}",
        summary.page_count(),
        index_path.display()
    );

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        warn!("Failed to open {} in browser: {}", index_path.display(), e);
    }

    Ok(())
}
