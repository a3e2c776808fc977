//! Developer-task fit scoring.
//!
//! # Score Convention
//! **Higher score = better fit.** The assigner picks the developer with the
//! strictly highest score among those with enough hours left.
//!
//! # Terms
//!
//! | Term | Default formula |
//! |------|-----------------|
//! | Priority | `priority * 10` |
//! | Skill fit | `max(0, 20 - 2 * abs(skill - difficulty))` |
//! | Preference | `15` if the task type matches the developer's preference |
//! | Load balance | `max(0, 15 - 15 * workload_fraction)` |
//!
//! `workload_fraction = (max_hours - remaining_hours) / max_hours`, i.e. the
//! share of the developer's budget already consumed in this run.

use serde::{Deserialize, Serialize};

use crate::models::{Developer, Task};

/// Weights of the fit score terms.
///
/// [`ScoringWeights::default`] reproduces the reference formula exactly.
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    /// Multiplier applied to task priority.
    pub priority_weight: f64,
    /// Skill-fit score at a perfect skill/difficulty match.
    pub skill_fit_max: f64,
    /// Points lost per unit of skill/difficulty gap.
    pub skill_gap_penalty: f64,
    /// Bonus when the task type matches the developer's preference.
    pub preference_bonus: f64,
    /// Load-balance score for an idle developer.
    pub load_balance_max: f64,
}

/// Per-term breakdown of a fit score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Weighted task priority.
    pub priority: f64,
    /// Closeness of skill level to task difficulty.
    pub skill_fit: f64,
    /// Bonus for a matching task type.
    pub preference: f64,
    /// Reward for spare capacity.
    pub load_balance: f64,
}

impl ScoreBreakdown {
    /// Sum of all terms.
    #[inline]
    pub fn total(&self) -> f64 {
        self.priority + self.skill_fit + self.preference + self.load_balance
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            priority_weight: 10.0,
            skill_fit_max: 20.0,
            skill_gap_penalty: 2.0,
            preference_bonus: 15.0,
            load_balance_max: 15.0,
        }
    }
}

impl ScoringWeights {
    /// Creates the reference weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority multiplier.
    pub fn with_priority_weight(mut self, weight: f64) -> Self {
        self.priority_weight = weight;
        self
    }

    /// Sets the preference bonus.
    pub fn with_preference_bonus(mut self, bonus: f64) -> Self {
        self.preference_bonus = bonus;
        self
    }

    /// Sets the load-balance ceiling.
    pub fn with_load_balance_max(mut self, max: f64) -> Self {
        self.load_balance_max = max;
        self
    }

    /// Sets the skill-fit ceiling and per-unit gap penalty.
    pub fn with_skill_fit(mut self, max: f64, gap_penalty: f64) -> Self {
        self.skill_fit_max = max;
        self.skill_gap_penalty = gap_penalty;
        self
    }

    /// Scores `developer` for `task` given the hours it still has.
    ///
    /// Pure: depends only on the arguments.
    pub fn score(&self, developer: &Developer, remaining_hours: f64, task: &Task) -> f64 {
        self.breakdown(developer, remaining_hours, task).total()
    }

    /// Scores `developer` for `task` and returns every term.
    pub fn breakdown(
        &self,
        developer: &Developer,
        remaining_hours: f64,
        task: &Task,
    ) -> ScoreBreakdown {
        let skill_gap = (developer.skill_level - task.difficulty).abs();
        let preference = if developer.prefers(&task.task_type) {
            self.preference_bonus
        } else {
            0.0
        };
        let workload = workload_fraction(developer.max_hours, remaining_hours);

        ScoreBreakdown {
            priority: task.priority * self.priority_weight,
            skill_fit: (self.skill_fit_max - skill_gap * self.skill_gap_penalty).max(0.0),
            preference,
            load_balance: (self.load_balance_max - workload * self.load_balance_max).max(0.0),
        }
    }
}

/// Share of a developer's budget already consumed.
///
/// A developer with no budget counts as fully loaded. The assigner never
/// offers such a developer any task.
pub fn workload_fraction(max_hours: f64, remaining_hours: f64) -> f64 {
    if max_hours == 0.0 {
        return 1.0;
    }
    (max_hours - remaining_hours) / max_hours
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Developer {
        Developer::new("Alice")
            .with_skill_level(7.0)
            .with_max_hours(40.0)
            .with_preferred_task_type("feature")
    }

    #[test]
    fn test_reference_formula_idle_developer() {
        let task = Task::new("Feature A")
            .with_difficulty(7.0)
            .with_hours(15.0)
            .with_task_type("feature")
            .with_priority(4.0);

        // 40 + 20 + 15 + 15
        let score = ScoringWeights::default().score(&alice(), 40.0, &task);
        assert!((score - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_skill_fit_floor() {
        let task = Task::new("hard").with_difficulty(20.0).with_task_type("bug");
        let b = ScoringWeights::default().breakdown(&alice(), 40.0, &task);
        assert!((b.skill_fit - 0.0).abs() < 1e-10);
        assert!((b.preference - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_skill_fit_partial() {
        let task = Task::new("t").with_difficulty(4.0);
        let b = ScoringWeights::default().breakdown(&alice(), 40.0, &task);
        // 20 - 2 * 3
        assert!((b.skill_fit - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_load_balance_term() {
        let task = Task::new("t");
        let weights = ScoringWeights::default();

        let idle = weights.breakdown(&alice(), 40.0, &task);
        assert!((idle.load_balance - 15.0).abs() < 1e-10);

        let half = weights.breakdown(&alice(), 20.0, &task);
        assert!((half.load_balance - 7.5).abs() < 1e-10);

        let full = weights.breakdown(&alice(), 0.0, &task);
        assert!((full.load_balance - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_fractional_priority() {
        let task = Task::new("t").with_priority(2.5);
        let b = ScoringWeights::default().breakdown(&alice(), 40.0, &task);
        assert!((b.priority - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_negative_priority() {
        let task = Task::new("t").with_priority(-3.0);
        let b = ScoringWeights::default().breakdown(&alice(), 40.0, &task);
        assert!((b.priority + 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_budget_counts_as_loaded() {
        assert!((workload_fraction(0.0, 0.0) - 1.0).abs() < 1e-10);
        let dev = Developer::new("idle");
        let b = ScoringWeights::default().breakdown(&dev, 0.0, &Task::new("t"));
        assert!(b.load_balance.is_finite());
        assert!((b.load_balance - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights::new()
            .with_priority_weight(1.0)
            .with_preference_bonus(0.0)
            .with_load_balance_max(0.0)
            .with_skill_fit(10.0, 1.0);
        let task = Task::new("t")
            .with_priority(5.0)
            .with_difficulty(9.0)
            .with_task_type("feature");
        // 5 + (10 - 2) + 0 + 0
        assert!((weights.score(&alice(), 40.0, &task) - 13.0).abs() < 1e-10);
    }

    #[test]
    fn test_weights_partial_json() {
        let weights: ScoringWeights = serde_json::from_str(r#"{"preferenceBonus": 30}"#).unwrap();
        assert!((weights.preference_bonus - 30.0).abs() < 1e-10);
        assert!((weights.priority_weight - 10.0).abs() < 1e-10);
    }
}
