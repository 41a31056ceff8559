//! NeuroLink - student learning platform backend
//!
//! Tracks courses, emotional check-ins and decisions for a student, derives a
//! cognitive profile from that history and answers decision questions through
//! an LLM advisor.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
