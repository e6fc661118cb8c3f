mod campaign;
mod ids;
mod money;

pub use campaign::{Adjustment, CampaignOverview, Donation, Donor, Person};
pub use ids::{CampaignId, DonationId, PersonId};
pub use money::Cents;
