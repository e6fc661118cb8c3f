use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ids::{CampaignId, DonationId, PersonId};
use crate::model::money::Cents;

//
// ─── CAMPAIGN OVERVIEW ────────────────────────────────────────────────────────
//

/// Snapshot of a single campaign as served by `GET /api/campaign/overview`.
///
/// Campaign totals are reported in cents. `percent_funded` is authoritative
/// upstream and is carried through as-is; it is never recomputed from the
/// totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignOverview {
    pub id: CampaignId,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub status: String,
    pub permalink: String,
    pub description: Option<String>,
    pub content: Option<String>,
    /// Epoch seconds.
    pub created: i64,
    /// Epoch seconds.
    pub updated: i64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub goal_in_cents: i64,
    pub amount_raised_in_cents: i64,
    pub percent_funded: f64,
    /// Display order is the order supplied by the server.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub donors: Vec<Donor>,
}

impl CampaignOverview {
    #[must_use]
    pub fn goal(&self) -> Cents {
        Cents::new(self.goal_in_cents)
    }

    #[must_use]
    pub fn raised(&self) -> Cents {
        Cents::new(self.amount_raised_in_cents)
    }
}

//
// ─── DONOR ────────────────────────────────────────────────────────────────────
//

/// A pledging individual within a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub person: Person,
    /// Whole currency units, not cents.
    pub pledge: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub donations: Vec<Donation>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub adjustments: Vec<Adjustment>,
}

impl Donor {
    #[must_use]
    pub fn pledge(&self) -> Cents {
        Cents::from_units(self.pledge)
    }

    /// Sum of all donations.
    #[must_use]
    pub fn donated(&self) -> Cents {
        self.donations.iter().map(Donation::amount).sum()
    }

    /// Sum of all adjustments.
    #[must_use]
    pub fn adjusted(&self) -> Cents {
        self.adjustments.iter().map(Adjustment::amount).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

//
// ─── CREDITS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub id: DonationId,
    pub amount_in_cents: i64,
}

impl Donation {
    #[must_use]
    pub fn amount(&self) -> Cents {
        Cents::new(self.amount_in_cents)
    }
}

/// Manual credit applied to a donor (matched funds, corrections, fundraisers).
///
/// Unlike [`Donation`], `amount` is already in whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub name: String,
    pub slug: String,
    pub amount: f64,
}

impl Adjustment {
    #[must_use]
    pub fn amount(&self) -> Cents {
        Cents::from_units(self.amount)
    }
}

/// Upstream sends `null` instead of `[]` for lists it never populated.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
