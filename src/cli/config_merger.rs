//! Merging of CLI overrides onto loaded settings.
//!
//! CLI flags have the highest precedence of all configuration sources and
//! are applied after the layered files and environment variables.

use crate::cli::parser::{Cli, Commands};
use crate::config::settings::Settings;

/// Apply CLI overrides to the loaded settings.
pub fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) {
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    if let Some(Commands::Serve { host, port, .. }) = &cli.command {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_flags_leave_settings_untouched() {
        let mut settings = Settings::default();
        apply_cli_overrides(&mut settings, &parse(&["stratus-rs"]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_serve_overrides_host_and_port() {
        let mut settings = Settings::default();
        let cli = parse(&["stratus-rs", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        apply_cli_overrides(&mut settings, &cli);

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let mut settings = Settings::default();
        apply_cli_overrides(&mut settings, &parse(&["stratus-rs", "--verbose"]));
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_quiet_lowers_log_level() {
        let mut settings = Settings::default();
        apply_cli_overrides(&mut settings, &parse(&["stratus-rs", "--quiet"]));
        assert_eq!(settings.logger.level, "error");
    }
}
