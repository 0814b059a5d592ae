//! agri-cli: ask the farming assistant from a terminal.
//!
//! Usage:
//!   agri-cli market --lang hi             Current crop prices in Hindi
//!   agri-cli crop tomato                  Market analysis for one crop
//!   agri-cli diagnose leaf.jpg --lang mr  Disease diagnosis from a photo
//!   agri-cli ask when should I sow wheat  Free-form question

use agri_advisor::advisor::Resolved;
use agri_advisor::{AdvisorConfig, AdvisorService, Locale, MediaAttachment};
use anyhow::{bail, Context};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

struct Options {
    locale: Locale,
    config: Option<String>,
    rest: Vec<String>,
}

fn parse_options(args: &[String]) -> anyhow::Result<Options> {
    let mut locale = Locale::En;
    let mut config = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" | "-l" => {
                let code = iter.next().context("--lang needs a language code")?;
                locale = Locale::from_code_lossy(code);
            }
            "--config" | "-c" => {
                config = Some(iter.next().context("--config needs a file path")?.clone());
            }
            _ => rest.push(arg.clone()),
        }
    }
    Ok(Options {
        locale,
        config,
        rest,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agri_advisor=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    match command {
        "version" | "--version" | "-V" => {
            cmd_version();
            return Ok(());
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    let opts = parse_options(&args[2..])?;
    let config = match &opts.config {
        Some(path) => AdvisorConfig::load(path).with_context(|| format!("loading {}", path))?,
        None => AdvisorConfig::from_env()?,
    };
    let advisor = AdvisorService::from_config(&config)?;
    let l = opts.locale;

    match command {
        "alerts" => print_json(&advisor.real_time_alerts(l).await)?,
        "market" => print_json(&advisor.market_data(l).await)?,
        "schemes" => print_json(&advisor.schemes(l).await)?,
        "weather" => print_json(&advisor.weather_forecast(l).await)?,
        "analysis" => print_text(advisor.market_analysis(l).await),
        "scheme-info" => print_text(advisor.scheme_information(l).await),
        "crop" => {
            let crop = required(&opts.rest, "crop <name>")?;
            print_text(advisor.crop_analysis(&crop, l).await)
        }
        "tips" => {
            let category = required(&opts.rest, "tips <category>")?;
            print_json(&advisor.farming_tips(&category, l).await)?
        }
        "recommend" => {
            let season = required(&opts.rest, "recommend <season>")?;
            print_json(&advisor.crop_recommendations(&season, l).await)?
        }
        "analytics" => {
            let period = required(&opts.rest, "analytics <period>")?;
            print_json(&advisor.farm_analytics(&period, l).await)?
        }
        "ask" => {
            let question = required(&opts.rest, "ask <question...>")?;
            print_text(advisor.voice_query(&question, l).await)
        }
        "quick" => {
            let action = required(&opts.rest, "quick <weather|price|scheme|pest>")?;
            print_text(advisor.quick_action(action.as_str(), l).await)
        }
        "diagnose" => {
            let path = required(&opts.rest, "diagnose <image-path>")?;
            let media = MediaAttachment::from_path(&path)
                .await
                .with_context(|| format!("reading {}", path))?;
            print_text(advisor.diagnose_crop_image(media, l).await)
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Remaining words joined with spaces; errors when there are none.
fn required(rest: &[String], usage: &str) -> anyhow::Result<String> {
    if rest.is_empty() {
        bail!("usage: agri-cli {}", usage);
    }
    Ok(rest.join(" "))
}

fn print_json<T: Serialize>(resolved: &Resolved<T>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(resolved)?);
    Ok(())
}

fn print_text(resolved: Resolved<String>) {
    if resolved.is_fallback() {
        eprintln!("(showing fallback content)");
    }
    println!("{}", resolved.value);
}

fn cmd_version() {
    println!("agri-cli {}", env!("CARGO_PKG_VERSION"));
}

fn print_usage() {
    println!(
        r#"agri-cli: farming assistant from the command line

USAGE:
    agri-cli <COMMAND> [ARGS] [--lang <code>] [--config <file>]

COMMANDS:
    alerts                   Seasonal alerts
    market                   Current crop prices
    schemes                  Government schemes
    weather                  Weather forecast with farming advice
    analysis                 Market analysis
    scheme-info              Scheme application guidance
    crop <name>              Market analysis for one crop
    tips <category>          Farming tips for a category
    recommend <season>       Crop recommendations for a season
    analytics <period>       Farm financial summary
    ask <question...>        Ask any farming question
    quick <action>           Quick action: weather, price, scheme, pest
    diagnose <image-path>    Diagnose disease or pests from a photo
    version                  Show version information
    help                     Show this help message

OPTIONS:
    --lang, -l <code>        en, hi, mr, gu, pa (default en)
    --config, -c <file>      YAML configuration file

ENVIRONMENT:
    GEMINI_API_KEY           Model API key (or store it in the OS keyring)
    AGRI_MODEL               Model name override
    RUST_LOG                 Log filter (default agri_advisor=info)"#
    );
}
