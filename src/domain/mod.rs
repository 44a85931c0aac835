// Domain layer - Core business models
pub mod dashboard;
