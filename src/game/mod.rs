//! Simulated game math (winner draws, prize splits).

pub mod logic;

pub use logic::{DrawOutcome, GameSimulator, DAILY_WINNERS, ENTRY_FEE_CENTS};
