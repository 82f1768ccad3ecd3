use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use mausam_core::{
    BsDate, Config, Dashboard, ForecastProvider as _, IconKind, Lang, MessageKey, bsdate,
    provider_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "mausam", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current conditions and the upcoming forecast for a city.
    Show {
        /// City name, e.g. "Kathmandu".
        city: String,

        /// Display language: "en" or "ne".
        #[arg(long, default_value = "en")]
        lang: String,
    },

    /// Convert a date between the Gregorian and Bikram Sambat calendars.
    Date {
        /// Date as YYYY-MM-DD; today if absent.
        date: Option<String>,

        /// Treat the date as Bikram Sambat and print its Gregorian
        /// equivalent instead.
        #[arg(long)]
        bs: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, lang } => show(&city, &lang).await,
            Command::Date { date, bs } => print_date(date.as_deref(), bs),
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let api_key = inquire::Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key")?;

    let mut config = Config::load()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str, lang: &str) -> anyhow::Result<()> {
    let lang = Lang::try_from(lang)?;
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let mut dashboard = Dashboard::new(lang);
    match provider.fetch_forecast(city).await {
        Ok(series) => dashboard.apply_success(1, series),
        Err(err) => {
            tracing::warn!(%city, error = %err, "forecast fetch failed");
            dashboard.apply_failure(1)
        }
    };

    render(&dashboard);
    Ok(())
}

fn render(dashboard: &Dashboard) {
    let today = Local::now().date_naive();
    println!("=== {} ===", dashboard.text(MessageKey::AppTitle));
    if let Ok(bs) = bsdate::from_gregorian(today) {
        println!("{bs}");
    }
    println!();

    if let Some(message) = dashboard.error_message() {
        println!("{message}");
        return;
    }

    let Some(current) = dashboard.current() else {
        println!("{}", dashboard.text(MessageKey::SearchPlaceholder));
        return;
    };

    let view = dashboard.view(current);
    println!("{}  {}°C  {}", glyph(view.icon), view.temperature_c, view.label);

    if dashboard.upcoming().is_empty() {
        return;
    }

    println!();
    println!("{}", dashboard.text(MessageKey::UpcomingForecast));
    for point in dashboard.upcoming() {
        let view = dashboard.view(point);
        println!("  {}  {}°C  {}", glyph(view.icon), view.temperature_c, view.label);
    }
}

fn glyph(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Sun => "☀",
        IconKind::CloudRain => "🌧",
        IconKind::Cloud => "☁",
        IconKind::Snowflake => "❄",
        IconKind::Unknown => "?",
    }
}

fn print_date(date: Option<&str>, bs: bool) -> anyhow::Result<()> {
    if bs {
        let raw = date.context(
            "A Bikram Sambat date is required, e.g. `mausam date --bs 2080-01-01`",
        )?;
        let gregorian = bsdate::to_gregorian(parse_bs_date(raw)?)?;
        println!("{gregorian}");
        return Ok(());
    }

    let gregorian = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let converted = bsdate::from_gregorian(gregorian)?;
    println!("{converted}");
    Ok(())
}

fn parse_bs_date(raw: &str) -> anyhow::Result<BsDate> {
    let parse = || -> Option<BsDate> {
        let mut parts = raw.split('-');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        parts.next().is_none().then_some(BsDate { year, month, day })
    };

    parse().with_context(|| format!("Invalid Bikram Sambat date '{raw}', expected YYYY-MM-DD"))
}
