use feedling_core::Registry;

/// Render category blocks: entries numbered from 1, `;` after each entry
/// and `.` after the last. A filter naming an absent category still prints
/// an empty, correctly terminated block.
pub fn run(registry: &Registry, category: Option<&str>) {
    println!();
    match category {
        Some(category) => print_block(registry, category),
        None => {
            for (category, _) in registry.iter() {
                print_block(registry, category);
            }
        }
    }
}

fn print_block(registry: &Registry, category: &str) {
    println!("{}:", category);
    let mut entries = registry.entries(category).peekable();
    while let Some((idx, entry)) = entries.next() {
        let mark = if entries.peek().is_some() { ";" } else { "." };
        println!("    {}. {} {}", idx, entry.name, mark);
    }
    println!();
}
