use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use nostform::{
    core::state::AppState,
    infrastructure::{cli::Cli, config::Config, relay::NostrRelayTransport, tui::real::RealTui},
    integration::{app_runner::AppRunner, headless::submit_once, runtime::Runtime},
    trace_dbg,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = trace_dbg!(Config::new()?);

    let transport = Arc::new(NostrRelayTransport::new(config.connect_timeout()));
    let mut runtime = Runtime::new(AppState::new_with_config(&config), transport);
    runtime.prefill(args.entries, args.relay);

    if args.headless {
        let outcome = submit_once(&mut runtime).await?;
        println!("{}", outcome.summary());
        if !outcome.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut runner = AppRunner::new(runtime, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
