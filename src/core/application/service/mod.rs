pub mod discovery_service;
pub mod entity_builder;
pub mod ledger;
