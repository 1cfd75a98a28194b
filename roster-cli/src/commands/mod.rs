pub mod activities;
pub mod membership;
pub mod seed;
pub mod serve;
