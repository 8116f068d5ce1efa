//! # Command Dispatch
//!
//! Parses the command line, builds the API over the configured stash
//! directory, runs exactly one of list / take / create, and writes the
//! result. Errors are returned to `main`, which owns the exit code.

use super::render::{render_confirmation, render_stash_list, render_stash_list_json};
use super::setup::{Cli, Mode, OutputFormat};
use clap::Parser;
use stash::api::StashApi;
use stash::error::Result;
use stash::init::initialize;
use stash::logging::init_logging;
use stash::store::fs::FileStore;
use std::io::{self, IsTerminal, Read, Write};

struct AppContext {
    api: StashApi<FileStore>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.mode() {
        Mode::List(limit) => handle_list(&ctx, limit, cli.output),
        Mode::Take(number) => handle_take(&ctx, number),
        Mode::Create => handle_create(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.dir.clone(), cli.teaser_lines)?;
    tracing::debug!(dir = %ctx.config.dir.display(), "stash context ready");

    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let use_color = !cli.no_color && !no_color_env && console::colors_enabled();

    Ok(AppContext {
        api: ctx.api,
        use_color,
    })
}

fn handle_list(ctx: &AppContext, limit: i64, output: OutputFormat) -> Result<()> {
    let result = ctx.api.list_stashes(limit)?;
    let rendered = match output {
        OutputFormat::Text => render_stash_list(&result.listed_stashes, ctx.use_color),
        OutputFormat::Json => render_stash_list_json(&result.listed_stashes)?,
    };
    print!("{}", rendered);
    Ok(())
}

fn handle_take(ctx: &AppContext, number: i64) -> Result<()> {
    let result = ctx.api.take_stash(number)?;

    // Exact bytes: no decoding, no added newline.
    let mut stdout = io::stdout().lock();
    for stash in &result.affected_stashes {
        stdout.write_all(&stash.content)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Shown when create mode would read from an interactive terminal.
fn terminal_input_hint() -> &'static str {
    if cfg!(windows) {
        "Reading stash from the terminal; finish with Ctrl-Z then Enter."
    } else {
        "Reading stash from the terminal; finish with Ctrl-D."
    }
}

fn handle_create(ctx: &mut AppContext) -> Result<()> {
    let mut stdin = io::stdin().lock();
    if stdin.is_terminal() {
        eprintln!("{}", terminal_input_hint());
    }

    let mut buffer = Vec::new();
    stdin.read_to_end(&mut buffer)?;

    let result = ctx.api.create_stash(buffer)?;

    let mut stdout = io::stdout().lock();
    let confirmation = render_confirmation(result.confirmation.as_deref(), ctx.use_color);
    stdout.write_all(confirmation.as_bytes())?;
    for stash in &result.affected_stashes {
        stdout.write_all(&stash.content)?;
        if !stash.content.ends_with(b"\n") {
            stdout.write_all(b"\n")?;
        }
    }
    stdout.flush()?;
    Ok(())
}
