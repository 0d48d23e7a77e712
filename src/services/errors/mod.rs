pub mod status_service_errors;
