use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use dossier::error::util::safe_read_to_string;
use dossier::utils::logging::console::print_batch_summary;
use dossier::utils::parse_tokens;
use dossier::{
    AccountLookup, BatchDriver, CommandAccountLookup, DossierConfig, LdapSearchDirectory,
    NoAccounts, OutputFormat, ReductionLevel, write_rows,
};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// Resolve identifiers against the directory and classify each person
#[derive(Debug, Parser)]
#[command(name = "dossier", version)]
struct Cli {
    /// Login identifiers or email aliases to classify
    tokens: Vec<String>,

    /// Read tokens from a file, one per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, env = "DOSSIER_CONFIG")]
    config: Option<PathBuf>,

    /// Position reduction level (0-3)
    #[arg(short, long)]
    level: Option<u8>,

    /// Output format: csv or json
    #[arg(short, long, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Skip sponsor lookups
    #[arg(long)]
    no_sponsor: bool,

    /// Skip office lookups
    #[arg(long)]
    no_office: bool,

    /// Do not show a progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<DossierConfig> {
        let mut config = match &self.config {
            Some(path) => DossierConfig::from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => DossierConfig::default(),
        };
        if let Some(level) = self.level {
            config.reduction_level = level;
        }
        if self.no_sponsor {
            config.accounts.lookup_sponsor = false;
        }
        if self.no_office {
            config.accounts.lookup_office = false;
        }
        if self.no_progress {
            config.show_progress = false;
        }
        config.validate()?;
        Ok(config)
    }

    fn load_tokens(&self) -> anyhow::Result<Vec<String>> {
        let mut text = self.tokens.join("\n");
        if let Some(path) = &self.input {
            let content = safe_read_to_string(path, "token list")?;
            text.push('\n');
            text.push_str(&content);
        }
        Ok(parse_tokens(&text))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let level: ReductionLevel = config.level()?;
    let tokens = cli.load_tokens()?;
    if tokens.is_empty() {
        warn!("No tokens given; nothing to classify");
        return Ok(());
    }
    info!("Classifying {} tokens at reduction level {level}", tokens.len());

    let directory = LdapSearchDirectory::new(&config.directory);
    let command_accounts = CommandAccountLookup::new(&config.accounts);
    let accounts: &dyn AccountLookup =
        if config.accounts.lookup_office || config.accounts.lookup_sponsor {
            &command_accounts
        } else {
            &NoAccounts
        };

    let start = Instant::now();
    let driver = BatchDriver::new(&directory, accounts, &config);
    let report = driver.classify(&tokens, level).await;

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_rows(&mut writer, &report.rows, cli.format)?;

    print_batch_summary(&report, start.elapsed());
    Ok(())
}
