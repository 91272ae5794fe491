// SPDX-License-Identifier: MPL-2.0
use settings_panel::app::{self, paths, Flags};

const HELP: &str = "\
settings_panel - a single-screen settings form

USAGE:
  settings_panel [OPTIONS]

OPTIONS:
  -h, --help             Print this help and exit
      --lang <LOCALE>    UI language (e.g. en-US, es, fr)
      --config-dir <DIR> Directory containing config.toml
                         (overrides SETTINGS_PANEL_CONFIG_DIR)

ENVIRONMENT:
  RUST_LOG               Log filter (default: warn)
";

fn main() -> iced::Result {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=settings_panel=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
