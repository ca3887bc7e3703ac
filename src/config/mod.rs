use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use std::convert::Infallible;
use std::time::Duration;

/// Prefix všech revizí znalostní báze (`kb-rev1`, `kb-rev2`, ...)
pub const INDEX_PREFIX: &str = "kb-rev";

/// Pattern indexů, nad kterými se počítá agregace podle `kind`
pub const KIND_INDEX_PATTERN: &str = "kb-*";

pub const KIND_FIELD: &str = "kind";

/// Horní mez počtu termů v agregaci (prakticky vyčerpávající)
pub const KIND_TERMS_SIZE: u32 = 9999;

#[derive(Parser, Debug, Clone)]
#[command(name = "kb-dashboard")]
#[command(about = "Read-only dashboard for knowledge base index revisions", long_about = None)]
pub struct Args {
    /// URL Elasticsearch clusteru
    #[arg(long, env = "KB_ELASTICSEARCH_URL")]
    pub elasticsearch_url: String,

    #[arg(long, env = "KB_ELASTICSEARCH_USERNAME", default_value = "")]
    pub elasticsearch_username: String,

    #[arg(long, env = "KB_ELASTICSEARCH_PASSWORD", default_value = "", hide_env_values = true)]
    pub elasticsearch_password: String,

    /// Neověřovat TLS certifikát clusteru
    #[arg(long, env = "KB_ELASTICSEARCH_INSECURE", action = ArgAction::SetTrue, value_parser = parse_bool_lenient)]
    pub insecure: bool,

    /// Token porovnávaný s query parametrem `access_token`
    #[arg(long, env = "KB_ACCESS_TOKEN", default_value = "", hide_env_values = true)]
    pub access_token: String,

    /// Adresa, na které server poslouchá
    #[arg(long, env = "KB_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Debug režim (verbose logging, detail chyb v odpovědi)
    #[arg(long, env = "KB_DEBUG", action = ArgAction::SetTrue, value_parser = parse_bool_lenient)]
    pub debug: bool,

    /// Timeout jednoho requestu na Elasticsearch v sekundách
    #[arg(long, env = "KB_REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,
}

/// Boolean z env proměnné: `1/t/true/0/f/false` v běžných zápisech,
/// cokoliv jiného je `false`
fn parse_bool_lenient(value: &str) -> Result<bool, Infallible> {
    Ok(matches!(value.trim(), "1" | "t" | "T" | "true" | "TRUE" | "True"))
}

/// Vyčištěná konfigurace procesu
#[derive(Debug, Clone)]
pub struct Config {
    pub elasticsearch_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub insecure: bool,
    pub access_token: String,
    pub bind: String,
    pub debug: bool,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let elasticsearch_url = args.elasticsearch_url.trim().to_string();
        if elasticsearch_url.is_empty() {
            return Err(anyhow!("Elasticsearch URL must not be empty"));
        }

        let bind = args.bind.trim().to_string();
        if bind.is_empty() {
            return Err(anyhow!("Bind address must not be empty"));
        }

        // Basic auth jen pokud jsou vyplněné obě hodnoty
        let username = args.elasticsearch_username.trim();
        let password = args.elasticsearch_password.trim();
        let (username, password) = if !username.is_empty() && !password.is_empty() {
            (Some(username.to_string()), Some(password.to_string()))
        } else {
            (None, None)
        };

        Ok(Self {
            elasticsearch_url,
            username,
            password,
            insecure: args.insecure,
            access_token: args.access_token.trim().to_string(),
            bind,
            debug: args.debug,
            request_timeout: Duration::from_secs(args.request_timeout_secs.max(1)),
        })
    }

    /// Default filter pro tracing, pokud není nastaven RUST_LOG
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "kb_dashboard=debug,tower_http=debug"
        } else {
            "kb_dashboard=info,tower_http=info"
        }
    }
}
