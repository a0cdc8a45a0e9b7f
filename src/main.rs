// SPDX-License-Identifier: MPL-2.0
use cms_admin::api::HttpClient;
use cms_admin::app::{self, config, paths, Flags};
use cms_admin::logging::{self, LogConfig};
use std::process::ExitCode;

const HELP: &str = "\
cms_admin - content management admin panel

USAGE:
  cms_admin [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, zh-CN)
  --server <URL>        Content server base URL, overrides the settings file
  --config-dir <DIR>    Directory holding settings.toml
  --log-json            Emit JSON log lines
  -h, --help            Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let mut log_config = LogConfig::from_env();
    log_config.json |= args.contains("--log-json");
    logging::init(&log_config);

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang value");
        None
    });
    let server: Option<String> = args.opt_value_from_str("--server").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --server value");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --config-dir value");
            None
        });

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(config_dir);
    let (mut config, config_warning) = config::load();
    if let Some(url) = server {
        config.server.base_url = url;
    }

    let api = match HttpClient::new(config.server.base_url.clone(), config.server.request_timeout())
    {
        Ok(api) => api,
        Err(err) => {
            tracing::error!(%err, "cannot create the HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        lang,
        config,
        config_warning,
        api,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
