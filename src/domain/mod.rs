pub mod period;
pub mod prediction;
