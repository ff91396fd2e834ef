use crate::{
    sink::Sink,
    types::{Field, Level, Message},
};
use std::sync::Arc;

/// Fans assembled log records out to an ordered set of [`Sink`]s, merging a
/// stable list of base fields into every call.
///
/// The sink list is fixed at construction and shared by reference across
/// derived loggers. Base fields are copy-derived: each `Logger` owns its own
/// list, so no instance can observe another's context.
#[derive(Clone, Debug)]
pub struct Logger {
    sinks: Arc<[Box<dyn Sink>]>,
    base_fields: Vec<Field>,
}

impl Logger {
    /// Constructs a logger over the given sinks and base fields.
    ///
    /// Construction never fails; a sink that failed its own setup is still
    /// registered (in its degraded state).
    pub fn new(
        sinks: Vec<Box<dyn Sink>>,
        base_fields: impl IntoIterator<Item = Field>,
    ) -> Self {
        Self {
            sinks: sinks.into(),
            base_fields: base_fields.into_iter().collect(),
        }
    }

    /// Assembles one [`Message`] and delivers it to every sink, in
    /// registration order, on the calling thread.
    ///
    /// The effective field sequence is the base fields first, in stored
    /// order, followed by the call-site fields in the order given. Sink
    /// failures are absorbed by the sinks themselves; this never raises to
    /// the caller.
    pub fn log(
        &self,
        level: Level,
        text: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        let mut effective = self.base_fields.clone();
        effective.extend(fields);
        let message = Message::new(level, text, effective);
        for sink in self.sinks.iter() {
            sink.handle(&message);
        }
    }

    pub fn debug(&self, text: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Debug, text, fields)
    }

    pub fn info(&self, text: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Info, text, fields)
    }

    pub fn warning(&self, text: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Warning, text, fields)
    }

    pub fn error(&self, text: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Error, text, fields)
    }

    /// Returns a new logger sharing this sink list whose base fields are the
    /// given fields first, in the order given, followed by this logger's
    /// base fields in their stored order.
    ///
    /// Newest-added context leads the display order; older context trails.
    pub fn derive(&self, extra_fields: impl IntoIterator<Item = Field>) -> Self {
        let mut base_fields: Vec<Field> = extra_fields.into_iter().collect();
        base_fields.extend(self.base_fields.iter().cloned());
        Self {
            sinks: Arc::clone(&self.sinks),
            base_fields,
        }
    }

    /// The base fields merged into every record this logger emits.
    pub fn base_fields(&self) -> &[Field] {
        &self.base_fields
    }
}
