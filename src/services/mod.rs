pub mod aggregate_service;
pub mod collector_service;
pub mod hh_client;
pub mod vacancy_store;
