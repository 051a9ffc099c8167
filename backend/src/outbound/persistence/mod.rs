//! File-backed persistence adapters.

pub mod json_store;
mod json_user_repository;

pub use json_user_repository::JsonUserRepository;
