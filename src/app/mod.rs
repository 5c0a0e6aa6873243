//! The interactive session: prompt flows, validators, error policy.

pub mod bootstrap;
pub mod environment;
pub mod session;
pub mod validators;
