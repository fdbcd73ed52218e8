use feedling_core::feed::{self, Fetcher};
use feedling_core::{Error, Registry, Result};

/// Look up the named feed, fetch and parse it, and print the channel with
/// its items, item descriptions run through the sanitizer.
pub async fn run(registry: &Registry, fetcher: &Fetcher, name: &str) -> Result<()> {
    let entry = registry
        .find(name)
        .ok_or_else(|| Error::NotFound(name.to_string()))?;

    let body = fetcher.fetch(&entry.link).await?;
    let document = feed::parse(&body)?;

    println!("  Title: {}", document.title);
    println!("  Link: {}", document.link);
    println!("  Description: {}", document.description);
    println!("  Language: {}", document.language);
    println!("  LastBuildDate: {}", document.last_build_date);
    println!("  Generator: {}", document.generator);

    for (idx, item) in document.items.iter().enumerate() {
        println!("Item {}", idx + 1);
        println!("\tTitle: {}", item.title);
        println!("\tLink: {}", item.link);
        println!("\tDescription: {}", feed::clean(&item.description));
        println!("---------------------------------------------------");
    }

    Ok(())
}
