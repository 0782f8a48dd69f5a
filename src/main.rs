// SPDX-License-Identifier: MPL-2.0
use story_circle::app::{self, paths, Flags};

const HELP: &str = "\
Story Circle

USAGE:
  story_circle [OPTIONS]

OPTIONS:
  --lang <TAG>          UI language (en, so, es)
  --location <SLUG>     Community location, e.g. seward-park
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = optional_arg(&mut args, "--lang");
    let location = optional_arg(&mut args, "--location");
    let config_dir = optional_arg(&mut args, "--config-dir");

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, location })
}

/// Reads `--key <value>`, logging and ignoring a malformed value.
fn optional_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%err, key, "ignoring invalid argument");
        None
    })
}
