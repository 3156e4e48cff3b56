//! Depot - device inventory tracker
//!
//! This library provides the backend for the Depot device-inventory
//! tracker plus the pure client-side helpers (auto-fill, MAC
//! formatting, CSV export) shared with the CLI. It exposes all modules
//! for testing purposes.

pub mod autofill;
pub mod csv;
pub mod entities;
pub mod errors;
pub mod mac;
pub mod settings;
pub mod storage;
pub mod web;
