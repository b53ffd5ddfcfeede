use autocomplete_input::cli::CliArgs;
use clap::Parser;
use color_eyre::eyre;

mod log;

fn main() -> eyre::Result<()> {
    let args = CliArgs::parse();

    if std::env::var("NO_COLOR").is_err() {
        color_eyre::install()?;
    } else {
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()?;
    }

    log::init().ok();
    tracing::debug!("Cli args: {args:?}");

    autocomplete_input::app::run(args)?;

    Ok(())
}
