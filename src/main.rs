// Entrypoint for the CLI application.
// - Keeps `main` small: resolve settings, build a console and hand it to
//   the menu loop.
// - Returns `anyhow::Result`; only a console failure ends with an error.

use crossterm::tty::IsTty;
use enrollment_cli::{app::App, config::Settings, ui::Console};
use std::io;

fn main() -> anyhow::Result<()> {
    // Logging goes to stderr and is silent unless RUST_LOG is set.
    env_logger::init();

    let settings = Settings::from_env();
    log::debug!("Using data file {:?}", settings.data_file);

    // Piped input gets the line reader so scripted sessions work too.
    if io::stdin().is_tty() {
        let console = Console::terminal(settings.color);
        App::start(console, settings.data_file)?.run()?;
    } else {
        let stdin = io::stdin();
        let console = Console::scripted(stdin.lock(), io::stdout());
        App::start(console, settings.data_file)?.run()?;
    }
    Ok(())
}
