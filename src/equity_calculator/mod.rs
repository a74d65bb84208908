mod combinations;
mod deck;
mod odometer;
mod partition;
mod results;
mod showdown;

pub use combinations::{choose, Combinations};
pub use deck::SimpleDeck;
pub use odometer::Odometer;
pub use partition::PartitionEnumerator;
pub use results::{normalize, EquityResult};
pub use showdown::ShowdownEnumerator;
