//! Presentational primitives. No state, no context.

mod badge;
mod card;
mod progress_bar;
mod spinner;

pub use badge::Badge;
pub use card::Card;
pub use progress_bar::ProgressBar;
pub use spinner::Spinner;
