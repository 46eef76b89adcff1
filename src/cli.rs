use crate::config::Settings;
use crate::order::render::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Page order generator for manual double-sided printing.
#[derive(Parser, Debug, Clone)]
#[command(name = "duplex-order")]
#[command(version, about)]
pub struct Args {
    /// Number of pages (a positive multiple of 4). Starts the interactive prompt when omitted.
    #[arg(allow_negative_numbers = true)]
    pub pages: Option<String>,

    /// Pages per output line.
    #[arg(long, short = 'c')]
    pub chunk_size: Option<usize>,

    /// Separator between page numbers on a line.
    #[arg(long, short = 's')]
    pub separator: Option<String>,

    /// Output format.
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Additional configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Only log errors.
    #[arg(long, short = 'q', conflicts_with = "debug")]
    pub quiet: bool,
}

impl Args {
    /// Flags given on the command line win over loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(size) = self.chunk_size {
            settings.chunk_size = size;
        }
        if let Some(sep) = &self.separator {
            settings.separator = sep.clone();
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_override_settings() {
        let args = Args::parse_from(["duplex-order", "8", "-c", "4", "--separator", " ", "-f", "json"]);
        let mut settings = Settings::default();
        args.apply(&mut settings);

        assert_eq!(args.pages.as_deref(), Some("8"));
        assert_eq!(settings.chunk_size, 4);
        assert_eq!(settings.separator, " ");
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let args = Args::parse_from(["duplex-order"]);
        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings, Settings::default());
        assert!(args.pages.is_none());
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_negative_pages_reach_validation() {
        let args = Args::parse_from(["duplex-order", "-4"]);
        assert_eq!(args.pages.as_deref(), Some("-4"));
    }

    #[test]
    fn test_debug_and_quiet_conflict() {
        assert!(Args::try_parse_from(["duplex-order", "-d", "-q"]).is_err());
    }
}
