use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use pkgsearch_console::cli::{Cli, Commands};
use pkgsearch_console::config::Config;
use pkgsearch_console::highlight::{
    ClipboardCopy, HighlightOptions, JsonHighlighter, StyledLine, Theme, to_ansi, to_plain,
};
use pkgsearch_console::{docs, logging, status};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref().and_then(logging::parse_level));

    let config = Config::load().context("failed to load configuration")?;

    match cli.command {
        Commands::Status {
            api_key,
            compact,
            copy,
        } => run_status(&config, api_key, compact, copy),
        Commands::Render {
            file,
            compact,
            level,
            copy,
        } => run_render(&config, file, compact, level, copy),
        Commands::Docs { endpoint } => run_docs(endpoint.as_deref()),
    }
}

fn run_status(config: &Config, api_key: Option<String>, compact: bool, copy: bool) -> Result<()> {
    let api_key = api_key.or_else(|| std::env::var("PKGSEARCH_API_KEY").ok());
    if api_key.is_none() {
        log::info!("no API key supplied; the service will answer with an authorization error");
    }

    let report = status::check(&config.api, api_key.as_deref());
    let summary = if report.success() {
        "API is operational"
    } else {
        "API is not responding"
    };
    println!("{summary} ({} ms)", report.response_time_ms);

    let value = report.to_value();
    let compact = compact || config.render.compact;
    let highlighter = JsonHighlighter::new(HighlightOptions {
        compact,
        nesting_level: 0,
    });
    print_lines(&highlighter.render(&value));

    if copy {
        copy_with_ack(|clipboard| clipboard.copy_json(&value, compact));
    }
    Ok(())
}

fn run_render(
    config: &Config,
    file: Option<PathBuf>,
    compact: bool,
    level: usize,
    copy: bool,
) -> Result<()> {
    let text = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    let value: serde_json::Value =
        serde_json::from_str(&text).context("input is not valid JSON")?;

    let compact = compact || config.render.compact;
    let highlighter = JsonHighlighter::new(HighlightOptions {
        compact,
        nesting_level: level,
    });
    print_lines(&highlighter.render(&value));

    if copy {
        copy_with_ack(|clipboard| clipboard.copy_json(&value, compact));
    }
    Ok(())
}

fn run_docs(endpoint: Option<&str>) -> Result<()> {
    let lines = match endpoint {
        Some(id) => match docs::find(id) {
            Some(endpoint) => docs::render_endpoint(&endpoint),
            None => {
                let known: Vec<&str> = docs::catalog().iter().map(|e| e.id).collect();
                bail!("unknown endpoint '{id}'; expected one of: {}", known.join(", "));
            }
        },
        None => docs::render_all(),
    };
    print_lines(&lines);
    Ok(())
}

/// Print tagged lines: colored when stdout is a terminal, plain when piped.
fn print_lines(lines: &[StyledLine]) {
    if std::io::stdout().is_terminal() {
        print!("{}", to_ansi(lines, &Theme::default()));
    } else {
        print!("{}", to_plain(lines));
    }
}

/// Run a copy action and print the acknowledgment while it is active.
/// Copy failures are logged inside the clipboard module; the message is
/// simply not printed.
fn copy_with_ack(copy: impl FnOnce(&mut ClipboardCopy)) {
    let mut clipboard = ClipboardCopy::new();
    copy(&mut clipboard);
    if clipboard.acknowledged() {
        println!("Copied to clipboard");
    }
}
