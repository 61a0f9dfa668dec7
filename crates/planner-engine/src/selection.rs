// ABOUTME: Activity selection combining normalization, classification and seeded ordering
// ABOUTME: Provides the pure select function and a memoizing engine that owns recompute policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity selection
//!
//! [`select`] is a pure function of its inputs: catalog, snapshot, the two
//! expansion flags and the page size. [`SelectionEngine`] wraps it for callers
//! that feed inputs incrementally; it collapses both lists whenever the
//! normalized temperature changes and only recomputes when an input actually
//! changed.

use std::sync::Arc;

use planner_core::constants::seeding::{TEMPERATURE_SEED_MULTIPLIER, UNSUITABLE_SEED_OFFSET};
use planner_core::models::{Activity, WeatherSnapshot};
use planner_core::pagination::{PageMode, PagedList};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::classify;
use crate::config::EngineConfig;
use crate::description::{describe, WeatherDescription};
use crate::shuffle::shuffle;
use crate::temperature::normalize_reading;

/// One side of the suitability partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionSide {
    /// Activities advisable at the current temperature
    Suitable,
    /// Activities outside their temperature bounds
    Unsuitable,
}

impl PartitionSide {
    /// Offset added to the temperature seed for this side
    #[must_use]
    pub const fn seed_offset(self) -> i64 {
        match self {
            Self::Suitable => 0,
            Self::Unsuitable => UNSUITABLE_SEED_OFFSET,
        }
    }
}

/// Shuffle seed for a normalized Celsius temperature
#[must_use]
pub fn seed_for(celsius: i32) -> i64 {
    i64::from(celsius) * TEMPERATURE_SEED_MULTIPLIER
}

/// Expansion flags for both lists, owned by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    /// Show every suitable activity
    pub suitable: bool,
    /// Show every unsuitable activity
    pub unsuitable: bool,
}

impl Expansion {
    /// Both lists collapsed
    #[must_use]
    pub const fn collapsed() -> Self {
        Self {
            suitable: false,
            unsuitable: false,
        }
    }

    /// Flag for one side
    #[must_use]
    pub const fn get(self, side: PartitionSide) -> bool {
        match side {
            PartitionSide::Suitable => self.suitable,
            PartitionSide::Unsuitable => self.unsuitable,
        }
    }

    /// Copy with one side's flag replaced
    #[must_use]
    pub const fn with(self, side: PartitionSide, expanded: bool) -> Self {
        match side {
            PartitionSide::Suitable => Self {
                suitable: expanded,
                ..self
            },
            PartitionSide::Unsuitable => Self {
                unsuitable: expanded,
                ..self
            },
        }
    }
}

/// Ordered, paginated views of both partitions for one set of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Normalized temperature, absent when no snapshot was available
    pub temperature: Option<i32>,
    /// Seed used for the suitable list, absent when no snapshot was available
    pub seed: Option<i64>,
    /// Suitable activities in seeded order
    pub suitable: PagedList<Activity>,
    /// Unsuitable activities in seeded order
    pub unsuitable: PagedList<Activity>,
}

impl SelectionResult {
    /// Result with nothing to show
    #[must_use]
    pub fn empty(page_size: usize) -> Self {
        Self {
            temperature: None,
            seed: None,
            suitable: PagedList::new(Vec::new(), page_size, PageMode::Collapsed),
            unsuitable: PagedList::new(Vec::new(), page_size, PageMode::Collapsed),
        }
    }

    /// List for one side
    #[must_use]
    pub const fn list(&self, side: PartitionSide) -> &PagedList<Activity> {
        match side {
            PartitionSide::Suitable => &self.suitable,
            PartitionSide::Unsuitable => &self.unsuitable,
        }
    }

    /// Total activities across both sides
    #[must_use]
    pub fn total(&self) -> usize {
        self.suitable.total() + self.unsuitable.total()
    }
}

/// Select and order activities for the current weather.
///
/// Without a snapshot both lists are empty. Otherwise the catalog is split by
/// suitability at the normalized temperature, the suitable side is shuffled
/// with `temperature * 137` and the unsuitable side with that seed plus 100.
/// Collapsed lists show the first `page_size` entries.
#[must_use]
pub fn select(
    catalog: &[Activity],
    snapshot: Option<&WeatherSnapshot>,
    expand_suitable: bool,
    expand_unsuitable: bool,
    page_size: usize,
) -> SelectionResult {
    let Some(snapshot) = snapshot else {
        return SelectionResult::empty(page_size);
    };

    let temperature = normalize_reading(&snapshot.temperature);
    let seed = seed_for(temperature);
    let partition = classify(catalog, temperature);

    let order = |items: &[Activity], side: PartitionSide, expanded: bool| {
        PagedList::new(
            shuffle(items, seed + side.seed_offset()),
            page_size,
            PageMode::from_expanded(expanded),
        )
    };

    SelectionResult {
        temperature: Some(temperature),
        seed: Some(seed),
        suitable: order(
            &partition.suitable,
            PartitionSide::Suitable,
            expand_suitable,
        ),
        unsuitable: order(
            &partition.unsuitable,
            PartitionSide::Unsuitable,
            expand_unsuitable,
        ),
    }
}

/// Stateful front for [`select`] that owns the recompute policy.
///
/// Inputs arrive independently and possibly partially. The engine keeps the
/// last result and hands out the same `Arc` until the catalog identity, the
/// normalized temperature or an expansion flag changes. A temperature change
/// always collapses both lists.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    page_size: usize,
    catalog: Arc<[Activity]>,
    snapshot: Option<Arc<WeatherSnapshot>>,
    temperature: Option<i32>,
    expansion: Expansion,
    cached: Option<Arc<SelectionResult>>,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global())
    }

    /// Create an engine from explicit configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self::with_page_size(config.selection.page_size)
    }

    /// Create an engine with a specific page size
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            catalog: Arc::from(Vec::<Activity>::new()),
            snapshot: None,
            temperature: None,
            expansion: Expansion::collapsed(),
            cached: None,
        }
    }

    /// Normalized temperature of the current snapshot
    #[must_use]
    pub const fn temperature(&self) -> Option<i32> {
        self.temperature
    }

    /// Current expansion flags
    #[must_use]
    pub const fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Current catalog
    #[must_use]
    pub fn catalog(&self) -> &Arc<[Activity]> {
        &self.catalog
    }

    /// Replace the catalog. Passing the same `Arc` again is a no-op.
    pub fn set_catalog(&mut self, catalog: Arc<[Activity]>) {
        if Arc::ptr_eq(&self.catalog, &catalog) {
            return;
        }
        debug!(activities = catalog.len(), "Activity catalog replaced");
        self.catalog = catalog;
        self.invalidate();
    }

    /// Replace the weather snapshot.
    ///
    /// When the normalized temperature differs from the previous one, both
    /// lists are collapsed before the next computation.
    pub fn set_snapshot(&mut self, snapshot: Option<Arc<WeatherSnapshot>>) {
        let temperature = snapshot
            .as_deref()
            .map(|snapshot| normalize_reading(&snapshot.temperature));
        self.snapshot = snapshot;

        if temperature != self.temperature {
            debug!(
                previous = ?self.temperature,
                current = ?temperature,
                "Temperature changed, collapsing activity lists"
            );
            self.temperature = temperature;
            self.expansion = Expansion::collapsed();
            self.invalidate();
        }
    }

    /// Set one side's expansion flag
    pub fn set_expanded(&mut self, side: PartitionSide, expanded: bool) {
        let expansion = self.expansion.with(side, expanded);
        if expansion != self.expansion {
            self.expansion = expansion;
            self.invalidate();
        }
    }

    /// Flip one side's expansion flag and return the new value
    pub fn toggle(&mut self, side: PartitionSide) -> bool {
        let expanded = !self.expansion.get(side);
        self.set_expanded(side, expanded);
        expanded
    }

    /// Current selection, recomputed only if an input changed since the last call
    pub fn result(&mut self) -> Arc<SelectionResult> {
        if let Some(cached) = &self.cached {
            return Arc::clone(cached);
        }

        let result = Arc::new(select(
            &self.catalog,
            self.snapshot.as_deref(),
            self.expansion.suitable,
            self.expansion.unsuitable,
            self.page_size,
        ));
        debug!(
            temperature = ?result.temperature,
            suitable = result.suitable.total(),
            unsuitable = result.unsuitable.total(),
            "Recomputed activity selection"
        );
        self.cached = Some(Arc::clone(&result));
        result
    }

    /// Weather description for the current snapshot
    #[must_use]
    pub fn describe(&self) -> Option<WeatherDescription> {
        describe(self.snapshot.as_deref())
    }

    fn invalidate(&mut self) {
        self.cached = None;
    }
}
