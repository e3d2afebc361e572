use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use loan_intake::config::{NotificationConfig, OfferConfig};
use loan_intake::error::AppError;
use loan_intake::notifications::{
    NotificationDispatcher, NotificationSettings, NotificationSettingsStore, TelegramSink,
};
use loan_intake::workflows::applications::{ApplicationIntakeService, InMemoryApplicationLog};
use loan_intake::workflows::banks::{default_partners, BankCatalog};
use loan_intake::workflows::offers::OfferCalculator;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type IntakeService = ApplicationIntakeService<InMemoryApplicationLog, TelegramSink>;

/// Shared collections and services the routers are built from.
pub(crate) struct Components {
    pub(crate) catalog: Arc<BankCatalog>,
    pub(crate) calculator: OfferCalculator,
    pub(crate) settings: Arc<NotificationSettingsStore>,
    pub(crate) intake: Arc<IntakeService>,
}

pub(crate) fn build_catalog(seed: bool) -> BankCatalog {
    if seed {
        BankCatalog::with_drafts(default_partners())
    } else {
        BankCatalog::new()
    }
}

pub(crate) fn build_components(
    offers: &OfferConfig,
    notifications: &NotificationConfig,
) -> Result<Components, AppError> {
    let catalog = Arc::new(build_catalog(offers.seed_banks));

    let initial = NotificationSettings::from(notifications);
    if !initial.is_configured() {
        warn!("TELEGRAM_BOT_TOKEN/TELEGRAM_CHAT_ID not set; notifications disabled until configured");
    }
    let settings = Arc::new(NotificationSettingsStore::new(initial));

    let client = reqwest::Client::builder()
        .timeout(notifications.delivery_timeout)
        .build()?;
    let sink = Arc::new(TelegramSink::new(client, notifications.api_base.clone()));
    let dispatcher =
        NotificationDispatcher::new(sink, settings.clone(), notifications.delivery_timeout);

    let log = Arc::new(InMemoryApplicationLog::new());
    let intake = Arc::new(ApplicationIntakeService::new(
        log,
        catalog.clone(),
        dispatcher,
    ));

    Ok(Components {
        catalog,
        calculator: OfferCalculator::new(offers.interest_model),
        settings,
        intake,
    })
}
