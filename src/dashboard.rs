// ABOUTME: Dashboard payload models and derived presentation metrics
// ABOUTME: Re-derives weeks tracked, remaining progress, and change direction from aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

//! Dashboard Derived-Metrics Formatter
//!
//! Operates on a pre-aggregated stats payload computed by the external data
//! service. This module performs no aggregation itself, only re-derivation
//! of simple ratios from already-aggregated inputs: it is total over its
//! documented input domain and never fails. Absence of the payload is a
//! caller-level "no data" condition, not an engine error.

use crate::anthropometrics::BmiCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One point of the weight-over-time series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightSample {
    /// Sample date
    pub date: DateTime<Utc>,
    /// Recorded weight (kg)
    pub weight_kg: f64,
    /// Goal weight at that date (kg)
    pub goal_weight_kg: f64,
}

/// Progress towards one named goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAchievement {
    /// Goal display name (e.g. "Daily Steps")
    pub goal_name: String,
    /// Achieved percentage in [0, 100]
    pub achieved_percent: f64,
}

/// Pre-aggregated dashboard statistics, read-only to this engine
///
/// Supplied by the remote data service, keyed by an opaque user identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardAggregate {
    /// Opaque user identifier the payload was aggregated for
    pub user_id: Uuid,
    /// Latest recorded weight (kg)
    pub current_weight_kg: f64,
    /// First recorded weight of the tracking period (kg)
    pub start_weight_kg: f64,
    /// Recorded weight change over the period (kg)
    pub weight_change_kg: f64,
    /// Latest BMI
    pub current_bmi: f64,
    /// Category for the latest BMI
    pub bmi_category: BmiCategory,
    /// Goal progress percentage in [0, 100]
    pub goal_progress_percent: f64,
    /// Days of tracking data behind the aggregate
    pub tracking_days: u32,
    /// Weight-over-time chart series
    pub weight_series: Vec<WeightSample>,
    /// Per-goal achievement series
    pub goal_series: Vec<GoalAchievement>,
}

/// Direction of the recorded weight change
///
/// The sign convention is inherited from the aggregation service: a
/// *positive* recorded change is labeled `Lost`. This reads
/// counter-intuitively and is a candidate naming inconsistency awaiting
/// product confirmation; it is preserved here for compatibility rather
/// than silently inverted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightChangeDirection {
    /// Positive recorded change
    Lost,
    /// Zero or negative recorded change
    Gained,
}

impl WeightChangeDirection {
    /// Human-readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Gained => "gained",
        }
    }
}

/// Presentation-ready metrics derived from a [`DashboardAggregate`]
///
/// Recomputed on every render; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDerived {
    /// Whole weeks of tracking data (`tracking_days / 7`, truncated)
    pub weeks_tracked: u32,
    /// Remaining progress percentage: `max(0, 100 - goal_progress)`
    pub remaining_progress_percent: f64,
    /// Direction label for the recorded weight change
    pub change_direction: WeightChangeDirection,
}

/// Derive presentation metrics from an aggregate payload
///
/// Pure re-derivation, no aggregation. Total over its input domain.
#[must_use]
pub fn derive_dashboard_metrics(aggregate: &DashboardAggregate) -> DashboardDerived {
    let change_direction = if aggregate.weight_change_kg > 0.0 {
        WeightChangeDirection::Lost
    } else {
        WeightChangeDirection::Gained
    };

    DashboardDerived {
        weeks_tracked: aggregate.tracking_days / 7,
        remaining_progress_percent: (100.0 - aggregate.goal_progress_percent).max(0.0),
        change_direction,
    }
}
