/// Print the command reference.
pub fn run() {
    println!(
        r#"
Commands:
  .help                     Display this help message
  .clear                    Clear the screen
  .add <url> [category]     Add a new RSS feed URL with an optional category (default: uncategorized)
  .remove <name>            Remove an RSS feed by its name
  .category <name> <cat>    Change the category of an existing RSS feed
  .show [category]          Show all RSS feeds, optionally filtered by category
  .open <name>              Open and display the contents of the specified RSS feed
  .exit                     Save changes and exit the program

Examples:
  .add https://example.com/feed.xml news        Add a feed to the 'news' category
  .remove example.com                           Remove the feed named 'example.com'
  .category example.com tech                    Move the 'example.com' feed to 'tech'
  .show news                                    Show feeds in the 'news' category
  .open example.com                             Open the 'example.com' feed
"#
    );
}
