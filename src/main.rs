//! Wiring & DI. Entry point: bootstrap adapters, inject into services, serve HTTP.
//! No business logic here.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use styleai::adapters::imaging::{Base64ImageEncoder, RandomToneClassifier};
use styleai::adapters::oracle::{MockOracle, OpenAiOracle};
use styleai::adapters::web::{AppState, UploadStore, create_router, serve};
use styleai::domain::InputValidator;
use styleai::ports::{
    ImageEncoderPort, OraclePort, RecommendationPort, StylistPort, ToneClassifierPort,
};
use styleai::shared::config::AppConfig;
use styleai::usecases::{RecommendationService, StylistService};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    // --- Oracle: real endpoint when a key is configured, canned demo replies otherwise ---
    let timeout = cfg.oracle_timeout();
    let oracle: Arc<dyn OraclePort> = if cfg.is_oracle_configured() {
        info!(
            url = %cfg.api_url_or_default(),
            vision_model = %cfg.vision_model_or_default(),
            text_model = %cfg.text_model_or_default(),
            timeout_secs = timeout.as_secs(),
            "oracle enabled"
        );
        Arc::new(
            OpenAiOracle::new(
                cfg.api_url_or_default(),
                cfg.api_key().unwrap_or_default(),
                cfg.vision_model_or_default(),
                cfg.text_model_or_default(),
                timeout,
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    } else {
        warn!("GROQ_API_KEY not set, running in demo mode with mock oracle");
        Arc::new(MockOracle::new())
    };

    // --- Imaging ---
    let classifier: Arc<dyn ToneClassifierPort> = match cfg.classifier_seed {
        Some(seed) => {
            info!(seed, "tone classifier seeded");
            Arc::new(RandomToneClassifier::seeded(seed))
        }
        None => Arc::new(RandomToneClassifier::from_entropy()),
    };
    let encoder: Arc<dyn ImageEncoderPort> = Arc::new(Base64ImageEncoder::new());

    // --- Services ---
    let enumerations = cfg.enumerations();
    let stylist: Arc<dyn StylistPort> = Arc::new(StylistService::new(oracle, timeout));
    let recommendations: Arc<dyn RecommendationPort> = Arc::new(RecommendationService::new(
        InputValidator::new(enumerations.clone()),
        classifier,
        encoder,
        stylist,
    ));

    // --- HTTP ---
    let upload_dir = cfg.upload_dir_or_default();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .map_err(|e| anyhow::anyhow!("create upload dir {}: {}", upload_dir, e))?;
    let max_upload_bytes = cfg.max_upload_bytes_or_default();
    info!(upload_dir = %upload_dir, max_upload_bytes, "uploads");

    let state = AppState {
        recommendations,
        uploads: UploadStore::new(&upload_dir),
        enumerations,
    };
    let router = create_router(state, max_upload_bytes);

    serve(router, &cfg.bind_addr_or_default())
        .await
        .map_err(|e| anyhow::anyhow!("server: {}", e))?;

    info!("shut down");
    Ok(())
}
