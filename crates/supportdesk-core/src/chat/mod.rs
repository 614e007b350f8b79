//! Session persistence port and the support service built on top of it.

pub mod repository;
pub mod service;
