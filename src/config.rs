use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_GOOGLE_CLIENT_ID: &str = "YOUR_GOOGLE_CLIENT_ID.apps.googleusercontent.com";
pub const DEFAULT_BACKEND_URL: &str = "https://script.google.com/macros/s/AKfycbz2dlQNwe56QsRgTUEQcqaCelX1DvfOucaTeVbGSwIK0YCC9Gor55q41a2gAGq5aBUwRQ/exec";
pub const DEFAULT_AUTHORIZED_DOMAINS: &str = "yourdomain.com";
const DEFAULT_INPUT: &str = "index.html";
const DEFAULT_OUT_DIR: &str = "public";
const OUTPUT_FILE_NAME: &str = "index.html";

#[derive(Debug, Parser)]
#[command(
    name = "pagebake",
    version,
    about = "Inject sign-in client settings into a static HTML page for deployment."
)]
pub struct Cli {
    /// OAuth client identifier written into the page. Falls back to GOOGLE_CLIENT_ID.
    /// Empty values use the built-in default.
    #[arg(long, env = "GOOGLE_CLIENT_ID")]
    pub google_client_id: Option<String>,

    /// Backend endpoint the page talks to.
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Comma-separated list of domains allowed to use the page's credentials.
    #[arg(long, env = "AUTHORIZED_DOMAINS")]
    pub authorized_domains: Option<String>,

    /// Source HTML document.
    #[arg(long, env = "PAGEBAKE_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory the built page is written to. Created if missing.
    #[arg(long, env = "PAGEBAKE_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Log output format.
    #[arg(long, env = "PAGEBAKE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub google_client_id: String,
    pub backend_url: String,
    pub authorized_domains: Vec<String>,
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_cli() -> Self {
        Config::from_args(Cli::parse())
    }

    pub fn from_args(cli: Cli) -> Self {
        let authorized_domains = or_default(cli.authorized_domains, DEFAULT_AUTHORIZED_DOMAINS);
        Self {
            google_client_id: or_default(cli.google_client_id, DEFAULT_GOOGLE_CLIENT_ID),
            backend_url: or_default(cli.backend_url, DEFAULT_BACKEND_URL),
            authorized_domains: split_domains(&authorized_domains),
            input: cli.input,
            out_dir: cli.out_dir,
            log_format: cli.log_format,
        }
    }

    /// Every setting at its built-in default, ignoring the process environment.
    pub fn defaults() -> Self {
        Self {
            google_client_id: DEFAULT_GOOGLE_CLIENT_ID.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            authorized_domains: split_domains(DEFAULT_AUTHORIZED_DOMAINS),
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            log_format: LogFormat::Text,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(OUTPUT_FILE_NAME)
    }
}

/// Unset and empty values both fall back to `default`.
fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Splits a comma-separated list, trimming each entry. Order and empty entries are kept.
pub fn split_domains(raw: &str) -> Vec<String> {
    raw.split(',').map(|part| part.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_domains_trims_and_keeps_order() {
        assert_eq!(split_domains("a.com, b.com"), vec!["a.com", "b.com"]);
        assert_eq!(
            split_domains("  z.org ,a.org,  m.org"),
            vec!["z.org", "a.org", "m.org"]
        );
        assert_eq!(split_domains("yourdomain.com"), vec!["yourdomain.com"]);
    }

    #[test]
    fn split_domains_keeps_empty_entries() {
        assert_eq!(split_domains("a.com,,b.com"), vec!["a.com", "", "b.com"]);
        assert_eq!(split_domains(""), vec![""]);
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::defaults();
        assert_eq!(config.google_client_id, DEFAULT_GOOGLE_CLIENT_ID);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.authorized_domains, vec!["yourdomain.com"]);
        assert_eq!(config.output_path(), PathBuf::from("public/index.html"));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "pagebake",
            "--google-client-id",
            "abc.apps.googleusercontent.com",
            "--backend-url",
            "https://api.example.com",
            "--authorized-domains",
            "a.com, b.com",
            "--out-dir",
            "dist/site",
            "--log-format",
            "json",
        ])
        .unwrap();
        let config = Config::from_args(cli);

        assert_eq!(config.google_client_id, "abc.apps.googleusercontent.com");
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.authorized_domains, vec!["a.com", "b.com"]);
        assert_eq!(config.output_path(), PathBuf::from("dist/site/index.html"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn empty_flag_values_fall_back_to_defaults() {
        let cli = Cli::try_parse_from([
            "pagebake",
            "--google-client-id",
            "",
            "--backend-url",
            "",
            "--authorized-domains",
            "",
        ])
        .unwrap();
        let config = Config::from_args(cli);

        assert_eq!(config.google_client_id, DEFAULT_GOOGLE_CLIENT_ID);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.authorized_domains, vec!["yourdomain.com"]);
    }

    #[test]
    fn whitespace_is_not_treated_as_empty() {
        assert_eq!(or_default(Some(" ".into()), "fallback"), " ");
        assert_eq!(or_default(None, "fallback"), "fallback");
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Cli::try_parse_from(["pagebake", "--log-format", "yaml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
