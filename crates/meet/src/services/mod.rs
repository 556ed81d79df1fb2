pub mod scoring;
pub mod seeding;

pub use scoring::{rank_min, score};
pub use seeding::{seed, seed_order};
