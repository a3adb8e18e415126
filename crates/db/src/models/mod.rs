pub mod epds_recommendation;
pub mod prediction;
