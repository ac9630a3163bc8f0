//! The check cycle.

use chrono::{DateTime, Utc};
use pricewatch_assets::AssetRegistry;
use pricewatch_fetch::QuoteSource;
use pricewatch_notify::{AlertMessage, Notifier};
use pricewatch_store::ObservationStore;
use pricewatch_types::{Observation, ObservationSet, PriceChange};
use tracing::{debug, error, info, warn};

use crate::{AssetOutcome, CheckOutcome, WatchError, WatcherConfig};

/// Compares fresh prices against the last stored observation per asset and
/// alerts when a move reaches the threshold.
///
/// The baseline rolls: every successful cycle replaces all stored prices, so
/// each cycle is compared with the one before it.
#[derive(Debug)]
pub struct PriceWatcher<Q, S, N> {
    config: WatcherConfig,
    quotes: Q,
    store: S,
    notifier: N,
}

impl<Q, S, N> PriceWatcher<Q, S, N>
where
    Q: QuoteSource,
    S: ObservationStore,
    N: Notifier,
{
    /// Creates a watcher over the given collaborators.
    #[must_use]
    pub const fn new(config: WatcherConfig, quotes: Q, store: S, notifier: N) -> Self {
        Self {
            config,
            quotes,
            store,
            notifier,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &WatcherConfig {
        &self.config
    }

    /// Returns the observation store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Runs one check cycle.
    ///
    /// 1. Loads stored observations. An unreadable store counts as empty.
    /// 2. Fetches current prices for every tracked asset.
    /// 3. Per asset, in sorted order: records a baseline if there is no prior
    ///    observation, otherwise alerts when `|change| >= threshold`.
    /// 4. Replaces the store with the prices fetched this cycle.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::Fetch`] if prices could not be fetched, in which
    /// case nothing is stored or sent, and [`WatchError::Persistence`] if the
    /// store could not be written. Failed deliveries are logged and recorded
    /// in the outcome instead.
    pub async fn run_check(&self) -> Result<CheckOutcome, WatchError> {
        let previous = self.load_previous();
        let symbols = self.config.assets();

        let quotes = self
            .quotes
            .quotes(symbols, self.config.currency())
            .await
            .map_err(|e| {
                error!(error = %e, "price fetch failed, cycle aborted");
                WatchError::Fetch(e)
            })?;

        let checked_at = Utc::now();
        let threshold = self.config.threshold();
        let mut next = ObservationSet::new();
        let mut assets = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            let Some(quote) = quotes.get(symbol).filter(|q| q.has_valid_price()) else {
                warn!(%symbol, "no price returned, dropping from store");
                assets.push(AssetOutcome::Missing {
                    symbol: symbol.clone(),
                });
                continue;
            };

            let outcome = match previous.get(symbol) {
                None => {
                    info!(%symbol, price = quote.price, "baseline recorded");
                    AssetOutcome::Baseline {
                        symbol: symbol.clone(),
                        price: quote.price,
                    }
                }
                Some(prior) => {
                    let change = PriceChange::between(prior.price, quote.price);
                    if change.crosses(threshold) {
                        let delivered = match self.alert(symbol, &change, checked_at).await {
                            Ok(()) => true,
                            Err(e) => {
                                warn!(%symbol, error = %e, "alert not delivered");
                                false
                            }
                        };
                        AssetOutcome::Alerted {
                            symbol: symbol.clone(),
                            change,
                            delivered,
                        }
                    } else {
                        debug!(%symbol, change_pct = change.percent, "within threshold");
                        AssetOutcome::Within {
                            symbol: symbol.clone(),
                            change,
                        }
                    }
                }
            };

            next.insert(Observation::new(symbol.clone(), quote.price, checked_at));
            assets.push(outcome);
        }

        self.store.save_all(&next).map_err(|e| {
            error!(error = %e, "failed to write observations");
            WatchError::Persistence(e)
        })?;

        let outcome = CheckOutcome { assets, checked_at };
        info!(
            stored = outcome.stored(),
            alerts = outcome.alerts().count(),
            undelivered = outcome.undelivered(),
            "check complete"
        );
        Ok(outcome)
    }

    fn load_previous(&self) -> ObservationSet {
        match self.store.load_all() {
            Ok(set) => {
                debug!(count = set.len(), "observations loaded");
                set
            }
            Err(e) => {
                warn!(error = %e, "observation store unreadable, starting empty");
                ObservationSet::new()
            }
        }
    }

    async fn alert(
        &self,
        symbol: &str,
        change: &PriceChange,
        at: DateTime<Utc>,
    ) -> Result<(), WatchError> {
        let asset = AssetRegistry::global().describe(symbol);
        let message = AlertMessage::new(asset.ticker(), change, at);

        info!(
            %symbol,
            direction = %change.direction(),
            change_pct = change.percent,
            price = change.current,
            "threshold crossed"
        );
        self.notifier.notify(&message.render()).await?;
        Ok(())
    }
}
