// File: crates/plot-cli/src/main.rs
// Summary: modelplot entry point; one resolve-render-exit cycle per invocation.

use clap::Parser;

use plot_cli::{render, request, Cli};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let job = request::resolve(cli)?;
    let path = render::render(&job)?;
    println!("Plot saved as: {}", path.display());
    Ok(())
}
