use std::env;

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use reedline::Signal;
use tracing::{debug, Level};

use bookform::{
    api::HttpBookApi,
    config::Config,
    controller::{BookFormController, Outcome},
    terminal::TerminalView,
    types::book::BookId,
};

mod command_parser;
mod form_prompt;
mod prompt;
mod repl;

type Controller = BookFormController<HttpBookApi, TerminalView>;

enum Flow {
    Continue,
    Exit,
}

fn book_id(matches: &ArgMatches) -> Result<BookId> {
    matches
        .get_one::<u64>("id")
        .map(|id| BookId(*id))
        .ok_or(anyhow!("Missing book id"))
}

async fn submit_by_prompt(controller: &mut Controller) -> Result<()> {
    match form_prompt::prompt_form(controller.form(), controller.submit_mode())? {
        Some(form) => {
            controller.submit(form).await;
        }
        None => {
            controller.cancel_edit();
            println!("Aborted!");
        }
    }
    Ok(())
}

async fn dispatch(matches: &ArgMatches, controller: &mut Controller) -> Result<Flow> {
    controller.expire_status();
    match matches.subcommand() {
        Some(("list", _)) => {
            controller.list().await;
        }
        Some(("add", _)) => {
            if controller.editing_book_id().is_some() {
                controller.cancel_edit();
            }
            submit_by_prompt(controller).await?;
        }
        Some(("edit", sub_matches)) => {
            let id = book_id(sub_matches)?;
            if controller.edit(id).await == Outcome::Done {
                submit_by_prompt(controller).await?;
            }
        }
        Some(("remove", sub_matches)) => {
            let id = book_id(sub_matches)?;
            controller
                .view_mut()
                .set_assume_yes(sub_matches.get_flag("yes"));
            let outcome = controller.delete(id).await;
            controller.view_mut().set_assume_yes(false);
            if outcome == Outcome::Cancelled {
                println!("Aborted!");
            }
        }
        Some(("submit", _)) => submit_by_prompt(controller).await?,
        Some(("cancel", _)) => controller.cancel_edit(),
        Some(("config", _)) => println!("{}", Config::default_as_string()?),
        Some(("exit", _)) => return Ok(Flow::Exit),
        Some((name, _)) => anyhow::bail!("Unknown command {name}"),
        None => anyhow::bail!("Missing command"),
    }
    Ok(Flow::Continue)
}

async fn handle_command(command: &str, controller: &mut Controller) -> Result<Flow> {
    let command = shlex::split(command).ok_or(anyhow!("Invalid command"))?;
    let matches = command_parser::arg_parser_repl().try_get_matches_from(command)?;
    dispatch(&matches, controller).await
}

fn init_tracing(config: &Config) {
    let level = config.log_level.parse::<Level>().unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::read_config()?;
    init_tracing(&config);
    debug!(api = %config.api_base_url, "Configuration loaded");

    let args_parsed = command_parser::arg_parser_cli().get_matches_from(env::args_os().skip(1));

    let api = HttpBookApi::new(&config.api_base_url)?;
    let history_file = config.history_path()?;
    let status_window = config.status_display();
    let mut controller =
        BookFormController::new(api, TerminalView::new(config)).with_status_window(status_window);

    if let Some(("repl", _)) = args_parsed.subcommand() {
        let mut repl = repl::Repl::new(command_parser::generate_completions(), history_file)?;
        controller.list().await;
        loop {
            match repl.read_line(controller.editing_book_id()) {
                Ok(Signal::Success(buffer)) if buffer.trim().is_empty() => continue,
                Ok(Signal::Success(buffer)) => {
                    match handle_command(&buffer, &mut controller).await {
                        Ok(Flow::Exit) => break,
                        Ok(Flow::Continue) => (),
                        Err(e) => println!("Error: {}", e),
                    };
                }
                Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => {
                    println!("\nAborted!");
                    break;
                }
                #[allow(unreachable_patterns)]
                Ok(signal) => debug!(?signal, "Ignored signal"),
                Err(e) => {
                    println!("Error: {}", e);
                    break;
                }
            }
        }
    } else {
        dispatch(&args_parsed, &mut controller).await?;
    }

    Ok(())
}
