use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use hamta::config::Config;
use hamta::fetch::article::{fetch_latest, RawArticle};
use hamta::fetch::client::NewsClient;
use hamta::output::terminal;
use hamta::similarity::cosine::cosine_similarity;
use hamta::similarity::decision::{Decision, DecisionPolicy};
use hamta::similarity::vectorizer::vectorize_pair;
use hamta::text::normalize::Normalizer;

/// Hamta: duplicate detection for Persian news articles.
///
/// Fetches the latest article from two news sources, normalizes their text,
/// and reports a TF-IDF cosine similarity score with a duplicate verdict.
#[derive(Parser)]
#[command(name = "hamta", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the latest article from both configured sources and compare them
    Compare {
        /// Override the similarity threshold (default: 0.9)
        #[arg(long)]
        threshold: Option<f64>,

        /// Emit the decision as JSON instead of the formatted report
        #[arg(long)]
        json: bool,
    },

    /// Compare two local text files, bypassing the fetcher
    Score {
        /// First article text file
        file_a: PathBuf,

        /// Second article text file
        file_b: PathBuf,

        /// Override the similarity threshold (default: 0.9)
        #[arg(long)]
        threshold: Option<f64>,

        /// Emit the decision as JSON instead of the formatted report
        #[arg(long)]
        json: bool,
    },

    /// Show the canonical token form of a local text file
    Tokens {
        /// Article text file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hamta=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { threshold, json } => {
            let (config, policy) = load_policy(threshold)?;
            config.require_language()?;

            let normalizer = Normalizer::persian();
            let client = NewsClient::new()?;

            let bar = terminal::spinner("Fetching the latest articles...");
            let (result_a, result_b) = tokio::join!(
                fetch_latest(&client, &config.source_a),
                fetch_latest(&client, &config.source_b),
            );
            bar.finish_and_clear();

            // Each source's outcome stands on its own: a failure on one
            // side is reported with that source's name, not folded into a
            // shared error.
            let article_a = require_article(result_a, &config.source_a.name)?;
            let article_b = require_article(result_b, &config.source_b.name)?;

            info!(
                source_a = %article_a.source,
                source_b = %article_b.source,
                "Fetched both articles"
            );

            let decision = compare_texts(&normalizer, &article_a.text, &article_b.text, &policy);
            emit(&decision, &article_a, &article_b, json)?;
        }

        Commands::Score {
            file_a,
            file_b,
            threshold,
            json,
        } => {
            let (config, policy) = load_policy(threshold)?;
            config.require_language()?;

            let normalizer = Normalizer::persian();
            let article_a = read_article(&file_a)?;
            let article_b = read_article(&file_b)?;

            let decision = compare_texts(&normalizer, &article_a.text, &article_b.text, &policy);
            emit(&decision, &article_a, &article_b, json)?;
        }

        Commands::Tokens { file } => {
            let article = read_article(&file)?;
            let normalizer = Normalizer::persian();
            let doc = normalizer.normalize(&article.text);

            println!("Tokens: {}", doc.tokens.len());
            if !doc.is_empty() {
                println!("{}", doc.joined());
            }
        }
    }

    Ok(())
}

/// Load config, apply a CLI threshold override, and build the policy.
fn load_policy(threshold_override: Option<f64>) -> Result<(Config, DecisionPolicy)> {
    let mut config = Config::load()?;
    if let Some(threshold) = threshold_override {
        config.threshold = threshold;
    }
    config.require_threshold()?;
    let policy = DecisionPolicy::new(config.threshold)?;
    Ok((config, policy))
}

/// The core pipeline over two raw texts: normalize, vectorize, score, decide.
fn compare_texts(
    normalizer: &Normalizer,
    text_a: &str,
    text_b: &str,
    policy: &DecisionPolicy,
) -> Decision {
    let doc_a = normalizer.normalize(text_a);
    let doc_b = normalizer.normalize(text_b);

    info!(
        tokens_a = doc_a.tokens.len(),
        tokens_b = doc_b.tokens.len(),
        "Normalized articles"
    );

    let (vector_a, vector_b) = vectorize_pair(&doc_a, &doc_b);
    let score = cosine_similarity(&vector_a, &vector_b);
    policy.decide(score)
}

/// Unwrap one source's fetch outcome with a source-specific message.
fn require_article(result: Result<Option<RawArticle>>, source: &str) -> Result<RawArticle> {
    match result {
        Ok(Some(article)) => Ok(article),
        Ok(None) => anyhow::bail!(
            "Could not find the latest article for {source}.\n\
             Check the configured CSS selectors (see .env.example)."
        ),
        Err(e) => Err(e.context(format!("Fetching from {source} failed"))),
    }
}

/// Read a local file into a RawArticle (for score/tokens).
fn read_article(path: &PathBuf) -> Result<RawArticle> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(RawArticle {
        source: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        url: path.display().to_string(),
        text,
    })
}

/// Print the decision, as JSON or as the formatted terminal report.
fn emit(
    decision: &Decision,
    article_a: &RawArticle,
    article_b: &RawArticle,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(decision)?);
    } else {
        terminal::display_result(decision, article_a, article_b);
    }
    Ok(())
}
