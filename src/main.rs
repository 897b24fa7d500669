//! Collector and dashboard CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ai_market_intel::{
    AppConfig, ChartKind, DashboardData, NewsCollector, PriceSeriesBuilder, RenderSession,
    dashboard, store,
};

#[derive(Parser)]
#[command(name = "ai-market-intel")]
#[command(about = "AI sector prices, headlines and a terminal dashboard", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Directory holding the CSV tables (overrides AIMI_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download daily prices and update the stock table when it changed
    Prices {
        /// Only these tickers (comma separated, e.g. "NVDA,AMD")
        #[arg(long)]
        tickers: Option<String>,
    },

    /// Collect recent AI headlines into the news table
    News,

    /// Prices, then news
    RunAll,

    /// Show the dashboard
    Dashboard {
        /// Print the dashboard once as text instead of opening the terminal UI
        #[arg(long)]
        plain: bool,

        /// Ticker to select first
        #[arg(long)]
        ticker: Option<String>,

        /// Chart to show: price, change or volume
        #[arg(long, default_value = "price")]
        chart: String,

        /// Number of headlines to list
        #[arg(long)]
        articles: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    // the terminal UI owns stdout, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ai_market_intel={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command {
        Commands::Prices { tickers } => collect_prices(&config, tickers).await?,
        Commands::News => collect_news(&config).await?,
        Commands::RunAll => {
            tracing::info!("step 1/2: prices");
            collect_prices(&config, None).await?;
            tracing::info!("step 2/2: news");
            collect_news(&config).await?;
        }
        Commands::Dashboard {
            plain,
            ticker,
            chart,
            articles,
        } => {
            let chart = ChartKind::parse(&chart)
                .ok_or_else(|| format!("unknown chart {chart:?}; expected price, change or volume"))?;
            let mut session = RenderSession::default().with_chart(chart);
            if let Some(t) = ticker {
                session = session.with_ticker(t.to_uppercase());
            }
            if let Some(n) = articles {
                session = session.with_article_count(n);
            }
            show_dashboard(&config, session, plain)?;
        }
    }

    Ok(())
}

async fn collect_prices(
    config: &AppConfig,
    tickers: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    config.require_tiingo_key()?;
    let client = config.client()?;

    let mut builder = PriceSeriesBuilder::new(&client).lookback_days(config.price_lookback_days);
    if let Some(list) = tickers {
        builder = builder.tickers(
            list.split(',')
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty()),
        );
    }

    let series = builder.run().await?;
    series.stats.log_summary("prices");

    let path = config.stock_path();
    match store::save_prices_if_changed(&path, &series.rows)? {
        store::SaveOutcome::Written => {
            tracing::info!(path = %path.display(), rows = series.rows.len(), "stock table updated")
        }
        store::SaveOutcome::Unchanged => {
            tracing::info!(path = %path.display(), "no changes detected; stock table left as is")
        }
        store::SaveOutcome::Empty => tracing::warn!("no price data fetched; nothing saved"),
    }
    Ok(())
}

async fn collect_news(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.require_news_key()?;
    let client = config.client()?;

    let collection = NewsCollector::new(&client)
        .lookback_days(config.news_lookback_days)
        .max_pages(config.news_max_pages)
        .collect()
        .await?;
    collection.stats.log_summary("news");
    if collection.stop.is_failure() {
        tracing::warn!(stop = ?collection.stop, "news collection ended early");
    }
    if !collection.is_worth_saving() {
        tracing::warn!("no articles collected; news table left as is");
        return Ok(());
    }

    let path = config.news_path();
    store::write_articles(&path, &collection.articles)?;
    tracing::info!(
        path = %path.display(),
        articles = collection.articles.len(),
        "news table written"
    );
    Ok(())
}

fn show_dashboard(
    config: &AppConfig,
    session: RenderSession,
    plain: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = DashboardData::load(&config.stock_path(), &config.news_path())?;

    if plain {
        let view = data.view(&session);
        let stdout = std::io::stdout();
        dashboard::render_plain(&view, &mut stdout.lock())?;
        return Ok(());
    }

    #[cfg(feature = "tui")]
    {
        dashboard::tui::DashboardApp::new(data, session).run()?;
        Ok(())
    }
    #[cfg(not(feature = "tui"))]
    {
        Err("built without the `tui` feature; use --plain".into())
    }
}
