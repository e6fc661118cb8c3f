use std::sync::Arc;

use campaign_core::config::{DEFAULT_API_BASE, DEFAULT_CAMPAIGN_URL};
use campaign_core::{DashboardConfig, PromoConfig, PromoVariant};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, OverviewLoader};
use tracing_subscriber::EnvFilter;
use ui::platform::{DesktopLinkOpener, LinkOpenerRef};
use ui::{App, UiApp, build_app_context};

/// Campaign landing page and donor progress dashboard.
#[derive(Parser, Debug)]
#[command(name = "donor-dashboard", version)]
struct Args {
    /// Base URL of the backend serving `/api/campaign/overview`
    #[arg(long, env = "DONOR_DASHBOARD_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// External campaign page shown by the promotion view
    #[arg(long, env = "DONOR_DASHBOARD_CAMPAIGN_URL", default_value = DEFAULT_CAMPAIGN_URL)]
    campaign_url: String,

    /// How to present the campaign page: `landing` (embedded) or `donate` (button)
    #[arg(long, env = "DONOR_DASHBOARD_PROMO", default_value = "landing", value_parser = parse_promo)]
    promo: PromoVariant,
}

fn parse_promo(raw: &str) -> Result<PromoVariant, campaign_core::Error> {
    raw.parse()
}

struct DesktopApp {
    services: AppServices,
    link_opener: LinkOpenerRef,
}

impl UiApp for DesktopApp {
    fn overview_loader(&self) -> Arc<OverviewLoader> {
        self.services.overview_loader()
    }

    fn promo(&self) -> PromoConfig {
        self.services.promo()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let promo = PromoConfig::new(&args.campaign_url, args.promo)?;
    let config = DashboardConfig::new(&args.api_base, promo)?;
    tracing::info!(
        overview = %config.overview_url,
        promo = %config.promo.variant,
        "starting donor dashboard"
    );

    let services = AppServices::new_http(&config)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        link_opener: Arc::new(DesktopLinkOpener),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Donor Dashboard")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
