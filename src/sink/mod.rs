use crate::types::Message;
use std::{fmt::Debug, sync::Arc};

pub use console::ConsoleSink;
pub use json_lines::JsonLinesSink;
pub use memory::MemorySink;

pub mod console;
pub mod json_lines;
pub mod memory;

/// An output target for assembled log records.
///
/// Implementations must absorb their own failures: `handle` never panics and
/// never propagates an error, so one failing sink cannot prevent delivery to
/// the sinks registered after it or abort the logging caller. Failures are
/// reported through the diagnostic channel (`tracing`) and swallowed.
pub trait Sink: Debug + Send + Sync {
    fn handle(&self, message: &Message);
}

/// Forwarding impl so a sink can be shared with (and observed from) code
/// outside the logger that owns it.
impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn handle(&self, message: &Message) {
        (**self).handle(message)
    }
}
