use anyhow::Result;
use clap::Parser;

use hopcrawl::sources::{ContentMode, HttpSource};
use hopcrawl::{CrawlConfig, Crawler, JsonReporter, Reporter, TextReporter};

/// Depth-bounded web crawler: fetches the start address, follows the links
/// found on it, and repeats until the depth budget runs out.
#[derive(Parser, Debug)]
#[command(name = "hopcrawl", version, about = "Depth-bounded web crawler")]
struct Args {
    /// Address to start crawling from
    start: String,

    /// How many hops to follow from the start address
    #[arg(long, default_value_t = 4)]
    max_depth: usize,

    /// Fetch each address at most once, even when several paths reach it
    #[arg(long)]
    dedup: bool,

    /// Report full page bodies instead of empty placeholders
    #[arg(long)]
    keep_content: bool,

    /// Emit one JSON event per line instead of text
    #[arg(long)]
    json: bool,

    /// Print crawl statistics when done
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .init();

    let args = Args::parse();

    let content_mode = if args.keep_content {
        ContentMode::Keep
    } else {
        ContentMode::Discard
    };
    let source = HttpSource::new()?.with_content_mode(content_mode);

    let config = CrawlConfig::default()
        .with_max_depth(args.max_depth)
        .with_allow_revisit(!args.dedup);
    let crawler = Crawler::new(Box::new(source)).with_config(config);

    let mut reporter: Box<dyn Reporter> = if args.json {
        Box::new(JsonReporter::new())
    } else {
        Box::new(TextReporter::new())
    };

    crawler.crawl(&args.start, reporter.as_mut()).await;

    if args.stats {
        crawler.stats().print_summary();
    }

    Ok(())
}
