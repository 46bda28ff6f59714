//! readme-changelog - CLI entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use readme_changelog::{
    Changelog, ChangelogBlock, ChangelogParser, render_block, render_changelog,
};

/// Print the changelog of a plugin readme.
#[derive(Parser, Debug)]
#[command(name = "readme-changelog")]
#[command(about = "Extract the changelog from a plugin readme")]
#[command(version)]
struct Cli {
    /// Path to the readme file
    #[arg(default_value = "readme.txt")]
    readme: PathBuf,

    /// Only print this version
    #[arg(long)]
    release: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let parser = ChangelogParser::new(&cli.readme)
        .with_context(|| format!("Failed to load {}", cli.readme.display()))?;
    let changelog = parser.get_changelog();

    match cli.release.as_deref() {
        Some(version) => {
            let block = select_release(changelog, version, &cli.readme)?;
            match cli.format {
                OutputFormat::Json => print_json(block, cli.pretty)?,
                OutputFormat::Text => print!("{}", render_block(version, block)),
            }
        }
        None => match cli.format {
            OutputFormat::Json => print_json(changelog, cli.pretty)?,
            OutputFormat::Text => print!("{}", render_changelog(changelog)),
        },
    }

    Ok(())
}

/// Look up the block requested with `--release`.
fn select_release<'a>(
    changelog: &'a Changelog,
    version: &str,
    readme: &Path,
) -> Result<&'a ChangelogBlock> {
    match changelog.get(version) {
        Some(block) => Ok(block),
        None => bail!("Version {} not found in {}", version, readme.display()),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize changelog")?;

    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_changelog::parse_readme;

    const README: &str = "== Changelog ==\n= 2.0 (2020-01-01) =\n* Two\n";

    #[test]
    fn test_select_known_release() {
        let changelog = parse_readme(README);
        let block = select_release(&changelog, "2.0", Path::new("readme.txt")).unwrap();

        assert_eq!(block.date, "2020-01-01");
        assert_eq!(block.entries, ["Two"]);
    }

    #[test]
    fn test_select_unknown_release_fails() {
        let changelog = parse_readme(README);
        let err = select_release(&changelog, "9.9", Path::new("readme.txt")).unwrap_err();

        assert_eq!(err.to_string(), "Version 9.9 not found in readme.txt");
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "readme-changelog",
            "plugin/readme.txt",
            "--release",
            "2.0",
            "--format",
            "text",
        ])
        .unwrap();

        assert_eq!(cli.readme, PathBuf::from("plugin/readme.txt"));
        assert_eq!(cli.release.as_deref(), Some("2.0"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["readme-changelog"]).unwrap();

        assert_eq!(cli.readme, PathBuf::from("readme.txt"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.release.is_none());
    }
}
