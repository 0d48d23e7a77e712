pub mod errors;
pub mod identity;
pub mod status_service;
pub mod time_service;
