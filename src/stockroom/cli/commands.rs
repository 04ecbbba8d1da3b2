use super::logging;
use super::render::{print_messages, Renderer};
use super::setup::{raw_argument, Cli, SessionCommand, SessionLine};
use clap::Parser;
use stockroom::api::StockroomApi;
use stockroom::commands::{CmdMessage, CmdResult};
use stockroom::config::StockroomConfig;
use stockroom::error::Result;
use stockroom::route::Route;
use stockroom::store::memory::MemoryCatalog;
use std::io::{self, BufRead, IsTerminal, Write};

struct AppContext {
    api: StockroomApi<MemoryCatalog>,
    renderer: Renderer,
    interactive: bool,
}

/// What the loop does after a session line has been handled.
enum Step {
    Render(CmdResult),
    Help,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;
    print!("{}", ctx.renderer.render_view(&ctx.api));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt(&ctx)?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match SessionLine::parse_line(&line) {
            Ok(command) => command,
            Err(_) => {
                let first = line.split_whitespace().next().unwrap_or_default();
                print_messages(&[CmdMessage::error(format!(
                    "Unknown or incomplete command `{}`; type `help` for the list",
                    first
                ))]);
                continue;
            }
        };
        tracing::debug!(?command, "session command");

        match dispatch(&mut ctx, command, &line) {
            Ok(Step::Render(result)) => {
                println!();
                print!("{}", ctx.renderer.render_view(&ctx.api));
                print_messages(&result.messages);
            }
            Ok(Step::Help) => print!("{}", ctx.renderer.render_help()),
            Ok(Step::Quit) => break,
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        }
    }

    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = StockroomConfig::load(cli.config.as_ref())?;

    let use_color = !cli.no_color && console::Term::stdout().features().colors_supported();
    if !use_color {
        colored::control::set_override(false);
    }

    let catalog = MemoryCatalog::seeded(config.seed.clone());
    tracing::debug!(products = config.seed.len(), "catalog seeded");

    Ok(AppContext {
        api: StockroomApi::new(catalog),
        renderer: Renderer::new(config, use_color),
        interactive: io::stdin().is_terminal(),
    })
}

fn prompt(ctx: &AppContext) -> Result<()> {
    if ctx.interactive {
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

fn dispatch(ctx: &mut AppContext, command: SessionCommand, line: &str) -> Result<Step> {
    let api = &mut ctx.api;
    let result = match command {
        SessionCommand::List => api.navigate(Route::List),
        SessionCommand::Add => api.add_product(),
        SessionCommand::Edit { id } => api.edit_product(&id)?,
        SessionCommand::Delete { id } => api.delete_product(&id)?,
        SessionCommand::Open { path } => api.open(&path)?,
        SessionCommand::Name { .. } => api.set_name(raw_argument(line))?,
        SessionCommand::Price { value } => api.set_price(value.unwrap_or_default())?,
        SessionCommand::Save => api.submit()?,
        SessionCommand::Back => api.back(),
        SessionCommand::Show => CmdResult::default(),
        SessionCommand::Help => return Ok(Step::Help),
        SessionCommand::Quit => return Ok(Step::Quit),
    };
    Ok(Step::Render(result))
}
