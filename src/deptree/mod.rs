//! Main module for deptree library functionality

pub mod building;
pub mod config;
pub mod error;
pub mod lexing;
pub mod node;
pub mod parsing;
pub mod testing;
