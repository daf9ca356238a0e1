use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing::error;

use topicmap::logging;
use topicmap::provider::{DataForSeoClient, KeywordProvider, StaticProvider};
use topicmap::{generate_topical_map, MapOptions, TopicalMapResult};

/// Children printed under each cluster before collapsing the rest
const CHILDREN_SHOWN: usize = 3;
/// Orphans printed before collapsing the rest
const ORPHANS_SHOWN: usize = 5;

/// Generate a topical map for a seed keyword.
///
/// Credentials come from DATAFORSEO_LOGIN and DATAFORSEO_PASSWORD unless
/// --fixture points at a canned keyword file.
///
/// Usage:
///    cargo run --bin generate_map -- "ai seo" --suggestions
#[derive(Parser)]
#[clap(name = "generate-map", about = "Generate a topical map for a seed keyword")]
struct Cli {
    /// Seed keyword
    #[clap(required = true)]
    keyword: String,

    /// Include keyword suggestions
    #[clap(short, long)]
    suggestions: bool,

    /// Minimum connection strength for clustering (0.0-1.0)
    #[clap(short, long)]
    threshold: Option<f64>,

    /// Maximum number of related keywords to request
    #[clap(short, long)]
    limit: Option<usize>,

    /// Print the full result as JSON instead of a summary
    #[clap(long)]
    json: bool,

    /// Read keywords from a JSON fixture instead of calling DataForSEO
    #[clap(long)]
    fixture: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    logging::configure_logging();

    let args = Cli::parse();
    if let Err(e) = run(&args).await {
        error!("Topical map generation failed: {:#}", e);
        eprintln!("{} {:#}", "Error:".bright_red(), e);
        process::exit(1);
    }
}

async fn run(args: &Cli) -> Result<()> {
    let mut options = MapOptions::from_env().with_suggestions(args.suggestions);
    if let Some(threshold) = args.threshold {
        options = options.with_threshold(threshold);
    }
    if let Some(limit) = args.limit {
        options.related_limit = limit;
    }
    options.validate()?;

    let result = match &args.fixture {
        Some(path) => generate(&StaticProvider::from_json_file(path)?, args, &options).await?,
        None => generate(&DataForSeoClient::from_env()?, args, &options).await?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_map(&result);
    }
    Ok(())
}

async fn generate<P: KeywordProvider>(
    provider: &P,
    args: &Cli,
    options: &MapOptions,
) -> Result<TopicalMapResult> {
    if !args.json {
        println!(
            "{} {}\n",
            "Generating topical map for:".bright_blue(),
            args.keyword.bright_yellow()
        );
    }
    generate_topical_map(provider, &args.keyword, options).await
}

fn print_map(result: &TopicalMapResult) {
    println!("{}: {}", "Clusters".bright_blue(), result.clusters.len());
    println!("{}: {}", "Orphan keywords".bright_blue(), result.orphans.len());
    println!();

    for (index, cluster) in result.clusters.iter().enumerate() {
        let parent = &cluster.parent;
        println!(
            "{} {}",
            format!("{}. {}", index + 1, parent.keyword).bold(),
            format!(
                "(vol: {}, diff: {} - {}, children: {})",
                group_thousands(parent.search_volume),
                parent.difficulty,
                parent.difficulty_label(),
                cluster.children.len()
            )
            .dimmed()
        );

        for child in cluster.children.iter().take(CHILDREN_SHOWN) {
            println!(
                "   └─ {} {}",
                child.keyword,
                format!(
                    "(vol: {}, diff: {} - {})",
                    group_thousands(child.search_volume),
                    child.difficulty,
                    child.difficulty_label()
                )
                .dimmed()
            );
        }

        if cluster.children.len() > CHILDREN_SHOWN {
            println!(
                "   └─ {}",
                format!("... and {} more", cluster.children.len() - CHILDREN_SHOWN).dimmed()
            );
        }
        println!();
    }

    if !result.orphans.is_empty() {
        println!("{}", format!("Orphan keywords (first {}):", ORPHANS_SHOWN).yellow());
        for orphan in result.orphans.iter().take(ORPHANS_SHOWN) {
            println!(
                "   • {} {}",
                orphan.keyword,
                format!("(vol: {})", group_thousands(orphan.search_volume)).dimmed()
            );
        }
        if result.orphans.len() > ORPHANS_SHOWN {
            println!("   ... and {} more", result.orphans.len() - ORPHANS_SHOWN);
        }
    }
}

// 1234567 -> "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
