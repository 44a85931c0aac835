// Application layer - Use cases and repository traits
pub mod dashboard_source;
pub mod filter;
pub mod ledger_service;
