pub mod epds_recommendation_repo;
pub mod prediction_repo;

pub use epds_recommendation_repo::EpdsRecommendationRepo;
pub use prediction_repo::PredictionRepo;
