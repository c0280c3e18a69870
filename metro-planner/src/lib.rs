//! Metro route planner.
//!
//! Answers: "what is the shortest way from this station to that one,
//! and how long will it take?" over a static network of lines,
//! stations and transfer connections.

pub mod loader;
pub mod network;
pub mod planner;
pub mod web;
