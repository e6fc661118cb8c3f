//! Progress aggregation for a campaign snapshot.
//!
//! Everything here is a pure function of a [`CampaignOverview`]: deriving
//! metrics twice from the same snapshot yields identical results, and the
//! derivation never panics for any structurally valid input.

use crate::model::{CampaignOverview, Cents, Donor, PersonId};

//
// ─── PERCENT ──────────────────────────────────────────────────────────────────
//

/// Completion percentage clamped to `0.0..=100.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Percent(f64);

impl Percent {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(100.0);

    /// Share of `whole` covered by `part`.
    ///
    /// A zero (or negative) target is handled explicitly instead of letting
    /// NaN/Infinity through: reaching it counts as complete, falling short of
    /// it counts as nothing. A positive `part` against a zero target is 100,
    /// not 0, so the percentage always agrees with `combined >= pledge`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(part: Cents, whole: Cents) -> Self {
        if !whole.is_positive() {
            return if part >= whole { Self::FULL } else { Self::ZERO };
        }
        let ratio = part.value() as f64 / whole.value() as f64 * 100.0;
        Self(ratio.clamp(0.0, 100.0))
    }

    /// Unrounded value, for progress bars.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Nearest whole percent, for labels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(self) -> u8 {
        self.0.round() as u8
    }
}

//
// ─── METRICS ──────────────────────────────────────────────────────────────────
//

/// Campaign-level totals against the goal.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignProgress {
    pub goal: Cents,
    pub raised: Cents,
    /// `raised / goal`, capped at 100.
    pub percent: Percent,
    /// Upstream figure, passed through untouched.
    pub percent_funded: f64,
}

impl CampaignProgress {
    #[must_use]
    pub fn from_overview(overview: &CampaignOverview) -> Self {
        let goal = overview.goal();
        let raised = overview.raised();
        Self {
            goal,
            raised,
            percent: Percent::of(raised, goal),
            percent_funded: overview.percent_funded,
        }
    }
}

/// One donor's credited total against their pledge.
#[derive(Debug, Clone, PartialEq)]
pub struct DonorProgress {
    pub person_id: PersonId,
    pub name: String,
    pub pledge: Cents,
    pub donated: Cents,
    pub adjusted: Cents,
    /// `donated + adjusted`.
    pub combined: Cents,
    /// `combined >= pledge`; reaching the pledge exactly counts.
    pub goal_met: bool,
    pub percent: Percent,
}

impl DonorProgress {
    #[must_use]
    pub fn from_donor(donor: &Donor) -> Self {
        let pledge = donor.pledge();
        let donated = donor.donated();
        let adjusted = donor.adjusted();
        let combined = donated + adjusted;

        Self {
            person_id: donor.person.id.clone(),
            name: donor.person.full_name(),
            pledge,
            donated,
            adjusted,
            combined,
            goal_met: combined >= pledge,
            percent: Percent::of(combined, pledge),
        }
    }
}

/// Everything the progress view renders, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub campaign: CampaignProgress,
    pub donors: Vec<DonorProgress>,
}

impl DerivedMetrics {
    #[must_use]
    pub fn goals_met(&self) -> usize {
        self.donors.iter().filter(|donor| donor.goal_met).count()
    }
}

/// Derives campaign and per-donor progress. Donor order is preserved.
#[must_use]
pub fn derive_metrics(overview: &CampaignOverview) -> DerivedMetrics {
    DerivedMetrics {
        campaign: CampaignProgress::from_overview(overview),
        donors: overview.donors.iter().map(DonorProgress::from_donor).collect(),
    }
}
