use feedling_core::{Error, Result};

/// A fully parsed, arity-checked REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Add {
        link: String,
        category: Option<String>,
    },
    Remove {
        name: String,
    },
    Category {
        name: String,
        category: String,
    },
    Show {
        category: Option<String>,
    },
    Open {
        name: String,
    },
    Exit,
}

impl Command {
    /// Parse an already-tokenized command line. All argument-count
    /// validation lives here, not in the handlers.
    pub fn parse(tokens: &[String]) -> Result<Self> {
        let (head, args) = tokens.split_first().ok_or(Error::UnknownCommand)?;

        match head.as_str() {
            ".help" => expect_none(args, Self::Help),
            ".clear" => expect_none(args, Self::Clear),
            ".exit" => expect_none(args, Self::Exit),
            ".add" => match args {
                [link] => Ok(Self::Add {
                    link: link.clone(),
                    category: None,
                }),
                [link, category] => Ok(Self::Add {
                    link: link.clone(),
                    category: Some(category.clone()),
                }),
                _ => Err(Error::InvalidArgCount),
            },
            ".remove" => match args {
                [name] => Ok(Self::Remove { name: name.clone() }),
                _ => Err(Error::InvalidArgCount),
            },
            ".category" => match args {
                [name, category] => Ok(Self::Category {
                    name: name.clone(),
                    category: category.clone(),
                }),
                _ => Err(Error::InvalidArgCount),
            },
            ".show" => match args {
                [] => Ok(Self::Show { category: None }),
                [category] => Ok(Self::Show {
                    category: Some(category.clone()),
                }),
                _ => Err(Error::InvalidArgCount),
            },
            ".open" => match args {
                [name] => Ok(Self::Open { name: name.clone() }),
                _ => Err(Error::InvalidArgCount),
            },
            _ => Err(Error::UnknownCommand),
        }
    }
}

fn expect_none(args: &[String], command: Command) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(Error::InvalidArgCount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn add_category_is_optional() {
        assert_eq!(
            Command::parse(&tokens(".add https://example.com/feed.xml")).unwrap(),
            Command::Add {
                link: "https://example.com/feed.xml".into(),
                category: None,
            }
        );
        assert_eq!(
            Command::parse(&tokens(".add https://example.com/feed.xml news")).unwrap(),
            Command::Add {
                link: "https://example.com/feed.xml".into(),
                category: Some("news".into()),
            }
        );
    }

    #[test]
    fn arg_counts_are_checked_at_parse_time() {
        assert!(matches!(
            Command::parse(&tokens(".add")),
            Err(Error::InvalidArgCount)
        ));
        assert!(matches!(
            Command::parse(&tokens(".add a b c")),
            Err(Error::InvalidArgCount)
        ));
        assert!(matches!(
            Command::parse(&tokens(".remove")),
            Err(Error::InvalidArgCount)
        ));
        assert!(matches!(
            Command::parse(&tokens(".category example.com")),
            Err(Error::InvalidArgCount)
        ));
        assert!(matches!(
            Command::parse(&tokens(".open a b")),
            Err(Error::InvalidArgCount)
        ));
    }

    #[test]
    fn show_takes_an_optional_filter() {
        assert_eq!(
            Command::parse(&tokens(".show")).unwrap(),
            Command::Show { category: None }
        );
        assert_eq!(
            Command::parse(&tokens(".show news")).unwrap(),
            Command::Show {
                category: Some("news".into())
            }
        );
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(matches!(
            Command::parse(&tokens(".frobnicate")),
            Err(Error::UnknownCommand)
        ));
        assert!(matches!(
            Command::parse(&tokens("add x")),
            Err(Error::UnknownCommand)
        ));
    }
}
