//! Reusable building blocks shared by several pages.

mod header;
mod participants;
mod race_card;

pub use header::header;
pub use participants::participants_list;
pub use race_card::{race_card, races_list};
