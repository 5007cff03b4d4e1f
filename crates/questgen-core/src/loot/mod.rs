//! Loot generation
//!
//! Treasure kinds are sampled uniformly with replacement and each draw adds
//! its value to a running total. Drawing stops at the first draw that brings
//! the total to or past the target, so the result is greedy along one random
//! order, not the cheapest combination over all orders.

pub mod generator;

pub use generator::{generate_loot, LootDraw};
