#![forbid(unsafe_code)]

//! # counter
//!
//! Terminal counter. Run with `cargo run -p counter_app`.

use anyhow::Context;
use counter_app::action::apply_all;
use counter_app::cli::{Cli, Command};
use counter_app::{Config, CounterApp, logging};
use counter_tea::{Model, Program};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli).context("failed to load configuration")?;
    logging::init(&config)?;

    match &cli.command {
        Some(Command::Run(args)) => {
            let value = apply_all(&args.actions);
            info!(actions = args.actions.len(), value, "headless run finished");
            println!("{value}");
        }
        Some(Command::Render) => {
            print!("{}", CounterApp::from_config(&config).view());
        }
        Some(Command::Config) => {
            print!("{}", config.to_toml().context("failed to serialize configuration")?);
        }
        None => {
            let app = CounterApp::from_config(&config);
            let mut program = Program::new(app);
            if config.alt_screen {
                program = program.with_alt_screen();
            }
            if config.mouse {
                program = program.with_mouse_cell_motion();
            }

            info!(title = %config.title, "starting counter");
            let final_model = program.run().context("failed to run counter")?;
            println!("Final count: {}", final_model.value());
        }
    }

    Ok(())
}
