use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use topical::config::Config;
use topical::dataset::Dataset;
use topical::model::TopicModel;
use topical::normalize::Lemmatizer;
use topical::output;
use topical::pipeline::TopicPipeline;
use topical::ranking;
use topical::web;

/// Topical: latent-topic inference for news articles.
///
/// Scores raw article text against a fitted topic model and reports the
/// dominant topic with its most representative terms.
#[derive(Parser)]
#[command(name = "topical", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one article from the dataset by position
    Predict {
        /// Article number within the dataset (0-based)
        #[arg(short = 'n', long, default_value = "0")]
        article_num: usize,

        /// Number of terms to report for the dominant topic
        #[arg(short = 't', long, default_value = "5")]
        top_n: usize,
    },

    /// Score ad-hoc text (reads stdin when TEXT is omitted)
    Score {
        /// The article text to score
        text: Option<String>,

        /// Number of terms to report for the dominant topic
        #[arg(short = 't', long, default_value = "5")]
        top_n: usize,
    },

    /// List the top terms of every topic in the model
    Topics {
        /// Number of terms to show per topic
        #[arg(short = 't', long, default_value = "10")]
        top_n: usize,
    },

    /// Start the HTTP inference API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on
        #[arg(long, default_value = "5000")]
        port: u16,
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
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topical=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Predict { article_num, top_n } => {
            let pipeline = init_pipeline(&config)?;
            let dataset = Dataset::load(&config.data_path)?;
            println!("Dataset contains {} articles.", dataset.len());

            let article = dataset.article(article_num)?;
            let inference = pipeline.infer(article, top_n)?;
            output::display_inference(&inference, &format!("article #{article_num}"));
        }

        Commands::Score { text, top_n } => {
            let pipeline = init_pipeline(&config)?;
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read article text from stdin")?;
                    buf
                }
            };
            let inference = pipeline.infer(&text, top_n)?;
            output::display_inference(&inference, "input text");
        }

        Commands::Topics { top_n } => {
            let pipeline = init_pipeline(&config)?;
            let model = pipeline.model();
            let topics: Vec<(usize, Vec<String>)> = (0..model.num_topics())
                .map(|t| Ok((t, ranking::top_terms(model, t, top_n)?)))
                .collect::<Result<_>>()?;
            output::display_topic_listing(&topics);
        }

        Commands::Serve { bind, port } => {
            // Load everything before binding: artifact problems must stop
            // the process here, never surface mid-request.
            let pipeline = Arc::new(init_pipeline(&config)?);
            web::run_server(pipeline, &bind, port).await?;
        }
    }

    Ok(())
}

/// One-time startup barrier: load the lemmatization resource and the model
/// artifact, fail loudly on either, and hand back the shared pipeline.
fn init_pipeline(config: &Config) -> Result<TopicPipeline> {
    let lemmatizer = match &config.lemma_exceptions {
        Some(path) => Lemmatizer::from_file(path)?,
        None => Lemmatizer::embedded()?,
    };

    let model = TopicModel::load(&config.model_path)
        .context("cannot start without a usable model artifact")?;
    info!(
        topics = model.num_topics(),
        vocab = model.vocab_size(),
        "Inference pipeline ready"
    );

    Ok(TopicPipeline::new(Arc::new(model), Arc::new(lemmatizer)))
}
