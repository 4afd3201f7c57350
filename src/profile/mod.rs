//! Pass-through access to the external profile/leaderboard service.

pub mod client;

pub use client::{ProfileClient, ProfileError};
