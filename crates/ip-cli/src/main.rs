mod server;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ip_core::IndicPhone;
use ip_rules::{Config, RuleEncoder};
use rmcp::{ServiceExt, transport::stdio};

#[derive(Parser)]
#[command(name = "indicphone", about = "Phonetic search tokens for Indian languages")]
struct Cli {
    /// Config file (default: $INDICPHONE_CONFIG, then ~/.indicphone/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server on stdio transport
    Serve,

    /// Print the tsvector for space-separated words
    Tokens {
        /// Language tag, e.g. kannada
        #[arg(long, short)]
        lang: String,

        /// Print entries as a JSON array instead of a tsvector string
        #[arg(long)]
        json: bool,

        /// Text to tokenize
        text: String,
    },

    /// Print the tsquery expression for a phrase
    Query {
        /// Language tag, e.g. kannada
        #[arg(long, short)]
        lang: String,

        /// Phrase to encode
        text: String,
    },

    /// List configured languages
    Languages,

    /// Load every rule file and report what was found
    Check,
}

fn load_config(cli: &Cli) -> Result<Config> {
    Config::discover(cli.config.as_deref()).context("failed to load config")
}

fn load_tokenizer(cli: &Cli) -> Result<IndicPhone> {
    load_config(cli)?
        .build_tokenizer()
        .context("failed to load phonetic rules")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Serve => cmd_serve(&cli).await,
        Commands::Tokens { lang, json, text } => cmd_tokens(&cli, lang, *json, text),
        Commands::Query { lang, text } => cmd_query(&cli, lang, text),
        Commands::Languages => cmd_languages(&cli),
        Commands::Check => cmd_check(&cli),
    }
}

async fn cmd_serve(cli: &Cli) -> Result<()> {
    let tokenizer = load_tokenizer(cli)?;
    tracing::info!(
        "starting MCP server with {} language(s)",
        tokenizer.languages().count()
    );

    let service = server::IpServer::new(tokenizer)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await?;
    tracing::info!("MCP server stopped");
    Ok(())
}

fn cmd_tokens(cli: &Cli, lang: &str, json: bool, text: &str) -> Result<()> {
    let tokenizer = load_tokenizer(cli)?;
    let vector = tokenizer
        .tokenize(text, lang)
        .with_context(|| format!("failed to tokenize for '{lang}'"))?;
    tracing::debug!("{} weighted tokens", vector.len());

    if json {
        let entries = serde_json::to_string(&vector.entries()).context("failed to encode JSON")?;
        println!("{entries}");
    } else {
        println!("{vector}");
    }
    Ok(())
}

fn cmd_query(cli: &Cli, lang: &str, text: &str) -> Result<()> {
    let tokenizer = load_tokenizer(cli)?;
    let query = tokenizer
        .query(text, lang)
        .with_context(|| format!("failed to build query for '{lang}'"))?;
    if query.is_empty() {
        tracing::debug!("no phonetic keys for {text:?}");
    }
    println!("{query}");
    Ok(())
}

fn cmd_languages(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    for (lang, _) in config.languages().context("invalid language in config")? {
        println!("{lang}");
    }
    Ok(())
}

fn cmd_check(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let languages = config.languages().context("invalid language in config")?;
    if languages.is_empty() {
        println!("(no languages configured)");
        return Ok(());
    }

    for (lang, path) in &languages {
        let encoder = load_rules(path)?;
        println!(
            "{lang}: {} symbols, {} rewrites ({})",
            encoder.symbol_count(),
            encoder.rewrite_count(),
            path.display()
        );
    }
    println!("ok. {} language(s)", languages.len());
    Ok(())
}

fn load_rules(path: &Path) -> Result<RuleEncoder> {
    RuleEncoder::from_path(path).with_context(|| format!("failed to load {}", path.display()))
}
