pub mod human;

pub use human::{GameOutcome, HumanMode};
