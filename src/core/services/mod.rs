pub mod audit_manager;
pub mod audit_service;
