//! Application use cases. Orchestrate domain logic via ports.

pub mod recommendation_service;
pub mod stylist_service;

pub use recommendation_service::RecommendationService;
pub use stylist_service::StylistService;
