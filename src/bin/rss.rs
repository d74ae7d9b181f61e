use std::fs::File;

use portfolio_site::{
    blog::list_posts,
    config::SiteConfig,
    logging::init_logging,
    rss::{build_channel, FEED_PATH},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = SiteConfig::from_env()?;
    let posts = list_posts(None)?;
    let channel = build_channel(&posts, &config);

    let file = File::create(FEED_PATH)?;
    channel.pretty_write_to(file, b' ', 2)?;

    tracing::info!(path = FEED_PATH, items = posts.len(), base_url = %config.base_url, "wrote RSS feed");
    Ok(())
}
