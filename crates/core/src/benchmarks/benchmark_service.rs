//! Bounded collection of independently-fetched benchmark overlays.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};

use super::benchmark_model::BenchmarkEntry;
use super::benchmark_traits::{BenchmarkProviderTrait, BenchmarkServiceTrait};
use crate::constants::{BENCHMARK_COLOR_PALETTE, BENCHMARK_LABEL_MAX_CHARS, SYMPHONY_TICKER_PREFIX};
use crate::performance::PerformancePoint;

/// Collection slot pairing a visible entry with the generation of the fetch
/// that may still fill it. A resolution applies only while ticker and
/// generation both match, so a resolution arriving after `remove` (or after
/// a remove/re-add cycle) is a no-op.
#[derive(Clone)]
struct Slot {
    entry: BenchmarkEntry,
    generation: u64,
}

pub struct BenchmarkService {
    provider: Arc<dyn BenchmarkProviderTrait>,
    slots: RwLock<Vec<Slot>>,
    next_generation: AtomicU64,
    max_benchmarks: usize,
    account_id: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl BenchmarkService {
    pub fn new(provider: Arc<dyn BenchmarkProviderTrait>, max_benchmarks: usize) -> Self {
        Self::with_scope(provider, max_benchmarks, None, None, None)
    }

    /// Scoped constructor: plain-ticker fetches carry the account and date
    /// range through to the provider.
    pub fn with_scope(
        provider: Arc<dyn BenchmarkProviderTrait>,
        max_benchmarks: usize,
        account_id: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            provider,
            slots: RwLock::new(Vec::new()),
            next_generation: AtomicU64::new(1),
            max_benchmarks,
            account_id,
            start_date,
            end_date,
        }
    }

    /// First palette color not in use; cycles once the palette is exhausted.
    fn pick_color(slots: &[Slot]) -> String {
        for color in BENCHMARK_COLOR_PALETTE {
            if !slots.iter().any(|slot| slot.entry.color == color) {
                return color.to_string();
            }
        }
        BENCHMARK_COLOR_PALETTE[slots.len() % BENCHMARK_COLOR_PALETTE.len()].to_string()
    }

    /// Inserts the pending placeholder, or returns `None` when the add is a
    /// no-op (at capacity, or the ticker is already tracked).
    fn insert_placeholder(&self, ticker: &str) -> Option<u64> {
        let mut slots = self.slots.write().unwrap();
        if slots.len() >= self.max_benchmarks {
            debug!(
                "Benchmark limit of {} reached; ignoring '{}'",
                self.max_benchmarks, ticker
            );
            return None;
        }
        if slots.iter().any(|slot| slot.entry.ticker == ticker) {
            debug!("Benchmark '{}' already tracked; ignoring duplicate add", ticker);
            return None;
        }

        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let entry = BenchmarkEntry {
            ticker: ticker.to_string(),
            label: ticker.to_string(),
            color: Self::pick_color(&slots),
            data: Vec::new(),
        };

        let mut next = slots.clone();
        next.push(Slot { entry, generation });
        *slots = next;
        Some(generation)
    }

    /// Fills the entry whose ticker and generation still match; a no-op for
    /// entries removed or re-added since the fetch was issued.
    fn apply_resolution(
        &self,
        ticker: &str,
        generation: u64,
        label: Option<String>,
        data: Vec<PerformancePoint>,
    ) {
        let mut slots = self.slots.write().unwrap();
        let next: Vec<Slot> = slots
            .iter()
            .map(|slot| {
                if slot.entry.ticker == ticker && slot.generation == generation {
                    let mut entry = slot.entry.clone();
                    if let Some(label) = &label {
                        entry.label = label.clone();
                    }
                    entry.data = data.clone();
                    Slot {
                        entry,
                        generation: slot.generation,
                    }
                } else {
                    slot.clone()
                }
            })
            .collect();
        *slots = next;
    }

    /// Drops the placeholder a failed fetch belongs to, leaving any newer
    /// entry under the same ticker alone.
    fn discard_failed(&self, ticker: &str, generation: u64) {
        let mut slots = self.slots.write().unwrap();
        let next: Vec<Slot> = slots
            .iter()
            .filter(|slot| !(slot.entry.ticker == ticker && slot.generation == generation))
            .cloned()
            .collect();
        *slots = next;
    }

    async fn resolve(&self, ticker: &str, generation: u64) {
        if let Some(symphony_id) = ticker.strip_prefix(SYMPHONY_TICKER_PREFIX) {
            match self.provider.get_symphony_benchmark(symphony_id).await {
                Ok(symphony) => {
                    let label = clamp_label(symphony.name.as_deref().unwrap_or(ticker));
                    self.apply_resolution(ticker, generation, Some(label), symphony.data);
                }
                Err(err) => {
                    warn!("Symphony benchmark '{}' failed to load: {}", ticker, err);
                    self.discard_failed(ticker, generation);
                }
            }
        } else {
            match self
                .provider
                .get_benchmark_history(
                    ticker,
                    self.start_date,
                    self.end_date,
                    self.account_id.as_deref(),
                )
                .await
            {
                Ok(history) => self.apply_resolution(ticker, generation, None, history.data),
                Err(err) => {
                    warn!("Benchmark '{}' failed to load: {}", ticker, err);
                    self.discard_failed(ticker, generation);
                }
            }
        }
    }
}

#[async_trait]
impl BenchmarkServiceTrait for BenchmarkService {
    async fn add(&self, ticker: &str) {
        let generation = match self.insert_placeholder(ticker) {
            Some(generation) => generation,
            None => return,
        };
        self.resolve(ticker, generation).await;
    }

    fn remove(&self, ticker: &str) {
        let mut slots = self.slots.write().unwrap();
        let next: Vec<Slot> = slots
            .iter()
            .filter(|slot| slot.entry.ticker != ticker)
            .cloned()
            .collect();
        if next.len() == slots.len() {
            debug!("Benchmark '{}' not tracked; ignoring remove", ticker);
        }
        *slots = next;
    }

    fn snapshot(&self) -> Vec<BenchmarkEntry> {
        self.slots
            .read()
            .unwrap()
            .iter()
            .map(|slot| slot.entry.clone())
            .collect()
    }
}

/// Clamps a display label to the character limit, eliding longer names.
fn clamp_label(name: &str) -> String {
    if name.chars().count() <= BENCHMARK_LABEL_MAX_CHARS {
        return name.to_string();
    }
    let kept: String = name.chars().take(BENCHMARK_LABEL_MAX_CHARS - 2).collect();
    format!("{}...", kept)
}
