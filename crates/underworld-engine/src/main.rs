//! Headless driver for the Underworld empire simulator.
//!
//! Stands in for the browser presentation layer: it builds one game session,
//! dispatches the configured autoplay actions, then ticks on a timer until
//! the tick limit or Ctrl-C, and finally logs the state as JSON.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `underworld-config.yaml` (or `$UNDERWORLD_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Seed the roll source
//! 4. Build the session for the configured variant
//! 5. Apply autoplay actions
//! 6. Run the tick scheduler
//! 7. Log stats and the final snapshot

mod error;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tokio::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use underworld_core::config::{GameConfig, VariantKind};
use underworld_core::scheduler::TickScheduler;
use underworld_core::session::{raid_session, rpg_session};
use underworld_core::{GameSession, GameVariant};
use underworld_crew::RngRolls;

use crate::error::EngineError;

/// Config path used when `UNDERWORLD_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "underworld-config.yaml";

type Rolls = RngRolls<SmallRng>;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, session setup, or the run fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("underworld-engine starting");
    match source {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }
    info!(
        variant = ?config.session.variant,
        tick_interval_ms = config.session.tick_interval_ms,
        max_ticks = config.session.max_ticks,
        seed = config.session.seed,
        autoplay = config.autoplay.len(),
        "Session configuration"
    );

    // 3. Seed the roll source.
    let rolls = RngRolls::new(config.session.seed.map_or_else(
        SmallRng::from_os_rng,
        SmallRng::seed_from_u64,
    ));

    // 4-7. Build and run the session.
    match config.session.variant {
        VariantKind::Raid => run(raid_session(&config, rolls), &config).await,
        VariantKind::Rpg => run(rpg_session(&config, rolls)?, &config).await,
    }
}

/// Drive one session to completion.
async fn run<V>(session: GameSession<V, Rolls>, config: &GameConfig) -> Result<(), EngineError>
where
    V: GameVariant + Send + 'static,
{
    let session = Arc::new(Mutex::new(session));

    // 5. Apply autoplay actions.
    {
        let mut guard = session.lock().await;
        for action in &config.autoplay {
            match guard.apply_action(action) {
                Ok(applied) => info!(
                    action = applied.action,
                    entry = applied.entry.as_deref(),
                    "Autoplay action applied"
                ),
                Err(reason) => warn!(action = action.name(), %reason, "Autoplay action rejected"),
            }
        }
    }

    // 6. Run the tick scheduler until the limit or Ctrl-C.
    let handle = TickScheduler::spawn(
        Arc::clone(&session),
        Duration::from_millis(config.session.tick_interval_ms),
        config.session.max_ticks,
    );
    let canceller = handle.canceller();
    let join = handle.join();
    tokio::pin!(join);

    let end_reason = tokio::select! {
        result = &mut join => result?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received");
            canceller.cancel();
            join.await?
        }
    };

    // 7. Log results.
    let guard = session.lock().await;
    let stats = guard.stats();
    let resources = guard.state().resources();
    info!(
        end_reason = ?end_reason,
        started_at = %guard.started_at(),
        ticks = stats.ticks,
        applied = stats.applied,
        rejected = stats.rejected,
        cash = resources.cash,
        influence = resources.influence,
        respect = resources.respect,
        latest = guard.state().activity_log().latest(),
        "Session ended"
    );
    info!(snapshot = %guard.snapshot_json()?, "Final state");
    info!("underworld-engine shutdown complete");
    Ok(())
}

/// Load configuration from `$UNDERWORLD_CONFIG` or `underworld-config.yaml`.
///
/// A missing file is not an error: defaults are used and the returned path
/// is `None`.
fn load_config() -> Result<(GameConfig, Option<PathBuf>), EngineError> {
    let path = std::env::var_os("UNDERWORLD_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = GameConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        Ok((GameConfig::default(), None))
    }
}
