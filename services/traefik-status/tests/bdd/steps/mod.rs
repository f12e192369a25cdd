//! BDD step definitions for traefik-status

pub mod classification_steps;
pub mod refresh_steps;
