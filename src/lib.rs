#![doc = include_str!("../README.md")]

pub use crate::config::*;
pub use crate::error::Error;
pub use crate::event::SpacetimeEvent;
pub use crate::logger::Logger;
pub use crate::sink::{ConsoleSink, JsonLinesSink, MemorySink, Sink};
pub use crate::types::*;

pub mod config;
pub mod error;
pub mod event;
pub mod logger;
pub mod sink;
pub mod types;
