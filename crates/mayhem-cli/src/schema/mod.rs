pub mod champion;
pub mod rank;
pub mod stats;
