use std::io::{self, BufRead, Write};
use std::path::Path;

use feedling_core::feed::Fetcher;
use feedling_core::{AppConfig, Error, Registry};

use crate::command::Command;
use crate::commands;

const PROMPT: &str = "feedling> ";

/// Run the interactive loop until `.exit` or end of input, then persist
/// the registry.
///
/// Every failure a command produces is handled here terminally: it is
/// reported as `"<label> : <message>"` and the loop moves on. Nothing
/// escapes to the caller except I/O errors on stdin itself.
pub async fn run(
    config: &AppConfig,
    registry: &mut Registry,
    links_path: &Path,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    run_with_input(stdin.lock(), config, registry, links_path).await
}

async fn run_with_input(
    input: impl BufRead,
    config: &AppConfig,
    registry: &mut Registry,
    links_path: &Path,
) -> anyhow::Result<()> {
    let fetcher = Fetcher::new(config)?;

    print_prompt()?;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                // A dying stdin is still end of input: persist before bailing.
                save(registry, links_path);
                return Err(err.into());
            }
        };
        let tokens = tokenize(&line);
        if tokens.is_empty() {
            print_prompt()?;
            continue;
        }

        match Command::parse(&tokens) {
            Ok(Command::Exit) => {
                save(registry, links_path);
                return Ok(());
            }
            Ok(command) => {
                if let Err(err) = dispatch(command, registry, &fetcher).await {
                    report(&tokens[0], &err);
                }
            }
            Err(err) => report(&tokens[0], &err),
        }

        print_prompt()?;
    }

    // End of input behaves like .exit.
    println!();
    save(registry, links_path);
    Ok(())
}

async fn dispatch(
    command: Command,
    registry: &mut Registry,
    fetcher: &Fetcher,
) -> feedling_core::Result<()> {
    match command {
        Command::Help => {
            commands::help::run();
            Ok(())
        }
        Command::Clear => {
            clear_screen();
            Ok(())
        }
        Command::Add { link, category } => registry.add(&link, category.as_deref()),
        Command::Remove { name } => {
            let removed = registry.remove(&name);
            tracing::debug!("Removed {} entries named {}", removed, name);
            Ok(())
        }
        Command::Category { name, category } => registry.change_category(&name, &category),
        Command::Show { category } => {
            commands::show::run(registry, category.as_deref());
            Ok(())
        }
        Command::Open { name } => commands::open::run(registry, fetcher, &name).await,
        // Handled by the loop before dispatch.
        Command::Exit => Ok(()),
    }
}

/// The uniform failure report: `"<label> : <message>"`, label being the
/// command word as typed.
fn report(label: &str, err: &Error) {
    println!("{} : {}", label, err);
}

fn save(registry: &Registry, links_path: &Path) {
    if let Err(err) = registry.save(links_path) {
        println!("Error writing registry to file: {}", err);
    }
}

/// Trim, lowercase, and whitespace-split one input line.
fn tokenize(line: &str) -> Vec<String> {
    let lowered = line.trim().to_lowercase();
    lowered.split_whitespace().map(str::to_string).collect()
}

fn print_prompt() -> io::Result<()> {
    print!("{}", PROMPT);
    io::stdout().flush()
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}
