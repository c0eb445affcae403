mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use campaign_analyzer::config::{default_config_path, AnalyzerConfig};
use campaign_analyzer::forecast::MIN_HISTORY_POINTS;
use campaign_analyzer::input::{load_campaigns, load_insights};
use campaign_analyzer::report::{build_forecast, ForecastReport};
use campaign_analyzer::{
    build_report, format_float, format_number, format_percent, AnalysisReport, AnalyzerError,
    ReportOptions,
};

#[derive(Parser)]
#[command(name = "campaign-analyzer", about = "Meta Ads campaign performance analyzer")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score campaigns and forecast the next period.
    Analyze(AnalyzeArgs),
    /// Bucket insights by date and forecast the next period.
    Forecast(ForecastArgs),
    /// Serve the analyzer over HTTP.
    Serve(ServeArgs),
    /// Write the default config file.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[arg(long)]
    campaigns: PathBuf,
    #[arg(long)]
    insights: PathBuf,
    /// Scope the trend and forecast to one campaign.
    #[arg(long)]
    campaign: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct ForecastArgs {
    #[arg(long)]
    insights: PathBuf,
    #[arg(long)]
    campaign: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long)]
    web_root: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long)]
    path: Option<PathBuf>,
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AnalyzerError> {
    let cli = Cli::parse();

    if let Command::InitConfig(args) = &cli.command {
        return run_init_config(args.clone(), cli.config.clone());
    }

    let (config, config_path) = AnalyzerConfig::load(cli.config)?;
    if config_path.exists() {
        info!(path = %config_path.display(), "loaded config");
    }

    match cli.command {
        Command::Analyze(args) => run_analyze(args, &config),
        Command::Forecast(args) => run_forecast(args),
        Command::Serve(args) => {
            let mut config = config;
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            if args.web_root.is_some() {
                config.server.web_root = args.web_root;
            }
            server::serve(config).await
        }
        Command::InitConfig(_) => Ok(()),
    }
}

fn run_analyze(args: AnalyzeArgs, config: &AnalyzerConfig) -> Result<(), AnalyzerError> {
    let campaigns = load_campaigns(&args.campaigns)?;
    let insights = load_insights(&args.insights)?;
    let options = ReportOptions {
        campaign_id: args.campaign,
    };

    let report = build_report(&campaigns, &insights, &options, &config.weights);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn run_forecast(args: ForecastArgs) -> Result<(), AnalyzerError> {
    let insights = load_insights(&args.insights)?;
    let forecast = build_forecast(&insights, args.campaign.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        return Ok(());
    }

    print_forecast(&forecast);
    Ok(())
}

fn run_init_config(args: InitConfigArgs, global: Option<PathBuf>) -> Result<(), AnalyzerError> {
    let path = args.path.or(global).unwrap_or_else(default_config_path);
    if path.exists() && !args.force {
        println!("Config already exists at {} (pass --force to overwrite)", path.display());
        return Ok(());
    }
    AnalyzerConfig::default().write(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("Campaigns:");
    for campaign in &report.campaigns {
        println!(
            "- {} [{}] score {} | {}",
            display_name(&campaign.name, &campaign.id),
            campaign.status.label(),
            format_float(campaign.performance_score, 3),
            campaign.recommendation
        );
        println!(
            "    spend {} | clicks {} | impressions {} | ctr {} | cpc {} | roas {}",
            format_float(campaign.spend, 2),
            format_number(campaign.clicks as f64),
            format_number(campaign.impressions as f64),
            format_percent(campaign.ctr),
            format_float(campaign.cpc, 2),
            format_float(campaign.roas, 2)
        );
    }

    let summary = &report.summary;
    println!(
        "\nAccount: spend {} | clicks {} | impressions {} | reach {} | purchases {}",
        format_float(summary.spend, 2),
        format_number(summary.clicks as f64),
        format_number(summary.impressions as f64),
        format_number(summary.reach as f64),
        format_number(summary.purchases as f64)
    );
    println!(
        "Blended: ctr {} | cpc {} | roas {}",
        format_percent(summary.ctr),
        format_float(summary.cpc, 2),
        format_float(summary.roas, 2)
    );
    println!(
        "Status: {} top | {} stable | {} under | {} no data",
        summary.status_counts.top_performer,
        summary.status_counts.stable,
        summary.status_counts.underperformer,
        summary.status_counts.no_data
    );

    println!();
    print_forecast(&ForecastReport {
        history: report.history.clone(),
        prediction: report.prediction.clone(),
    });
}

fn print_forecast(forecast: &ForecastReport) {
    println!("History ({} days):", forecast.history.len());
    for point in &forecast.history {
        println!(
            "  {}  spend {}  clicks {}",
            point.date,
            format_float(point.spend, 2),
            format_number(point.clicks as f64)
        );
    }

    match &forecast.prediction {
        Some(prediction) => {
            println!(
                "Forecast: spend {} | clicks {}",
                format_float(prediction.predicted_spend, 2),
                format_number(prediction.predicted_clicks)
            );
            println!("- {}", prediction.recommendation);
        }
        None => println!(
            "Forecast: not enough history (need at least {} days)",
            MIN_HISTORY_POINTS
        ),
    }
}

fn display_name<'a>(name: &'a str, id: &'a str) -> &'a str {
    if name.trim().is_empty() {
        id
    } else {
        name
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
