//! Tasklist: a to-do task CRUD service over HTTP.
//!
//! This crate manages to-do task records (description, due date, status)
//! backed by a relational store and exposed as a JSON HTTP API.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (SQLite, in-memory)
//!
//! # Modules
//!
//! - [`todo`]: Task model, repository port, adapters, and services
//! - [`http`]: axum router, wire DTOs, and error mapping

pub mod http;
pub mod todo;
