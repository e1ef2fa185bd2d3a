use clap::Parser;

use crate::{domain::entry::Entry, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "URL",
        help = "Relay URL to prefill (ws:// or wss://)"
    )]
    pub relay: Option<String>,

    #[arg(
        short,
        long = "entry",
        value_name = "NAME=NUMBER",
        value_parser = parse_entry,
        help = "Table row to prefill; repeat for more rows"
    )]
    pub entries: Vec<Entry>,

    #[arg(
        long,
        help = "Submit the prefilled form once without the TUI and print the outcome"
    )]
    pub headless: bool,
}

/// Parses `NAME=NUMBER`; the number part is kept as typed
pub fn parse_entry(s: &str) -> Result<Entry, String> {
    match s.split_once('=') {
        Some((name, number)) => Ok(Entry::new(name, number)),
        None => Err(format!("invalid entry `{s}`, expected NAME=NUMBER")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("Alice=5"), Ok(Entry::new("Alice", "5")));
        assert_eq!(parse_entry("a=b=c"), Ok(Entry::new("a", "b=c")));
        assert_eq!(parse_entry("=7"), Ok(Entry::new("", "7")));
        assert!(parse_entry("Alice").is_err());
    }

    #[test]
    fn test_cli_defaults() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["nostform"])?;

        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.relay, None);
        assert!(cli.entries.is_empty());
        assert!(!cli.headless);

        Ok(())
    }

    #[test]
    fn test_cli_entries_and_relay() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "nostform",
            "--relay",
            "wss://relay.example.com",
            "-e",
            "Alice=5",
            "--entry",
            "Bob=7",
            "--headless",
        ])?;

        assert_eq!(cli.relay.as_deref(), Some("wss://relay.example.com"));
        assert_eq!(
            cli.entries,
            vec![Entry::new("Alice", "5"), Entry::new("Bob", "7")]
        );
        assert!(cli.headless);

        Ok(())
    }
}
