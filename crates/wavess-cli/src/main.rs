mod analyze;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "wavess")]
#[command(about = "Wavess post performance, audience relevance & engagement sentiment")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze the posts, audience, and comments tables and print a report
    Analyze {
        /// Directory holding the CSV tables (overrides WAVESS_DATA_DIR)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,

        /// Number of keywords to list (overrides WAVESS_TOP_KEYWORDS)
        #[arg(long)]
        top: Option<usize>,

        /// Comment sentiment histogram bins (overrides WAVESS_HISTOGRAM_BINS)
        #[arg(long)]
        bins: Option<usize>,

        /// YAML lexicon overlay (overrides WAVESS_LEXICON_PATH)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
    /// Score the sentiment of one or more texts
    Sentiment {
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Map one or more job roles to an audience field
    Classify {
        #[arg(required = true)]
        roles: Vec<String>,
    },
    /// Compute the engagement score for a set of counters
    Score {
        #[arg(long, allow_negative_numbers = true)]
        likes: f64,
        #[arg(long, allow_negative_numbers = true)]
        comments: f64,
        #[arg(long, allow_negative_numbers = true)]
        shares: f64,
    },
}

fn main() -> anyhow::Result<()> {
    // Parse first so `--help` and usage errors never depend on the environment.
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = wavess_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Analyze {
            data_dir,
            format,
            top,
            bins,
            lexicon,
        }) => {
            let overrides = analyze::AnalyzeOverrides {
                data_dir,
                top_keywords: top,
                histogram_bins: bins,
                lexicon_path: lexicon,
            };
            analyze::run_analyze(&config, overrides, format)?;
        }
        Some(Commands::Sentiment { texts }) => {
            let lexicon = analyze::load_lexicon(config.lexicon_path.as_deref())?;
            for text in &texts {
                let polarity = lexicon.polarity(text);
                let label = wavess_analysis::sentiment_label(polarity).to_string();
                println!("{polarity:>6.2}  {label:<9} {text}");
            }
        }
        Some(Commands::Classify { roles }) => {
            for role in &roles {
                let field = wavess_analysis::classify_role(role).to_string();
                println!("{field:<15}{role}");
            }
        }
        Some(Commands::Score {
            likes,
            comments,
            shares,
        }) => {
            let score = wavess_analysis::engagement_score(likes, comments, shares)?;
            println!("{score:.2}");
        }
        None => println!("wavess ready; run `wavess analyze` to build a report"),
    }

    Ok(())
}
