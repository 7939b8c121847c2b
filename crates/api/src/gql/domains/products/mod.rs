// Products are reached through their category; the domain carries the types
// and the availability/pricing logic, not a root query.

pub mod service;
pub mod types;
