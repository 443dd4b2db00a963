pub mod filter;
pub mod health;
