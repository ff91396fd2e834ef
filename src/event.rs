use crate::{
    logger::Logger,
    types::{EventId, Field, PARENT_NONE},
};
use internment::Intern;
use std::sync::atomic::{AtomicI64, Ordering};

/// Process-wide id allocator. Atomic so concurrent event creation still
/// yields globally unique, creation-ordered ids.
static NEXT_EVENT_ID: AtomicI64 = AtomicI64::new(0);

fn next_event_id() -> EventId {
    NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A named unit of work whose start and end are each recorded as a log
/// emission carrying identity and lineage.
///
/// Identity (`id`) and parentage (`parent_id`) are fixed at creation and
/// never change; an id is allocated whether or not `start`/`end` are ever
/// called. `start` and `end` are pure emissions: the event enforces no
/// transition order, so zero, one, or many calls of either are all legal.
/// Reconstructing the call tree from the flat record stream is the
/// consumer's job, using the `ID`/`ParentID` pairs and the relative order of
/// the Start/End records.
#[derive(Clone, Debug)]
pub struct SpacetimeEvent {
    name: Intern<String>,
    id: EventId,
    parent_id: Option<EventId>,
    logger: Logger,
}

impl SpacetimeEvent {
    /// Creates a root event: allocates the next global id and binds the
    /// given logger.
    pub fn new(name: impl Into<String>, logger: &Logger) -> Self {
        Self {
            name: Intern::new(name.into()),
            id: next_event_id(),
            parent_id: None,
            logger: logger.clone(),
        }
    }

    /// Creates a child of this event: a fresh global id, this event's id as
    /// parent, and the same logger.
    ///
    /// The child's name is independent text; lineage is carried purely by
    /// `ID`/`ParentID`, never by name concatenation.
    pub fn make_child(&self, name: impl Into<String>) -> Self {
        Self {
            name: Intern::new(name.into()),
            id: next_event_id(),
            parent_id: Some(self.id),
            logger: self.logger.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    /// Id of the event that created this one, or `None` for a root.
    pub fn parent_id(&self) -> Option<EventId> {
        self.parent_id
    }

    /// Emits the Start record for this event.
    pub fn start(&self) {
        self.emit("Spacetime Start")
    }

    /// Emits the End record for this event.
    pub fn end(&self) {
        self.emit("Spacetime End")
    }

    fn emit(&self, text: &str) {
        self.logger.info(
            text,
            [
                Field::new("EventName", self.name.as_str()),
                Field::new("ID", self.id),
                Field::new("ParentID", self.parent_id.unwrap_or(PARENT_NONE)),
            ],
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        sink::MemorySink,
        types::{FieldValue, Level},
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn capture() -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(vec![Box::new(Arc::clone(&sink))], []);
        (logger, sink)
    }

    #[test]
    fn siblings_get_distinct_increasing_ids() {
        let (logger, _sink) = capture();
        let root = SpacetimeEvent::new("root", &logger);
        let x = root.make_child("X");
        let y = root.make_child("Y");

        assert!(x.id() > root.id());
        assert!(y.id() > x.id());
        assert_eq!(x.parent_id(), Some(root.id()));
        assert_eq!(y.parent_id(), Some(root.id()));
    }

    #[test]
    fn ids_are_allocated_at_creation_without_emission() {
        let (logger, sink) = capture();
        let a = SpacetimeEvent::new("A", &logger);
        let b = SpacetimeEvent::new("B", &logger);

        // Never started or ended, yet both hold distinct identities
        assert!(b.id() > a.id());
        assert!(sink.is_empty());
    }

    #[test]
    fn root_emits_the_no_parent_sentinel() {
        let (logger, sink) = capture();
        let root = SpacetimeEvent::new("root", &logger);
        root.start();

        let msgs = sink.take();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].level, Level::Info);
        assert_eq!(msgs[0].text, "Spacetime Start");
        assert_eq!(
            msgs[0].fields,
            vec![
                Field::new("EventName", "root"),
                Field::new("ID", root.id()),
                Field::new("ParentID", PARENT_NONE),
            ]
        );
        // The sentinel is outside the allocated id space
        assert!(root.id() > PARENT_NONE);
    }

    #[test]
    fn child_emissions_reference_the_parent() {
        let (logger, sink) = capture();
        let parent = SpacetimeEvent::new("parent", &logger);
        let child = parent.make_child("child");
        child.start();
        child.end();

        let msgs = sink.take();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].text, "Spacetime Start");
        assert_eq!(msgs[1].text, "Spacetime End");
        for msg in &msgs {
            assert_eq!(msg.field("EventName"), Some(&FieldValue::from("child")));
            assert_eq!(msg.field("ID"), Some(&FieldValue::Integer(child.id())));
            assert_eq!(
                msg.field("ParentID"),
                Some(&FieldValue::Integer(parent.id()))
            );
        }
    }

    #[test]
    fn no_transition_order_is_enforced() {
        let (logger, sink) = capture();
        let event = SpacetimeEvent::new("loose", &logger);

        // End before start, then a double start: all recorded as-is
        event.end();
        event.start();
        event.start();

        let texts: Vec<String> = sink.take().into_iter().map(|m| m.text).collect();
        assert_eq!(
            texts,
            vec!["Spacetime End", "Spacetime Start", "Spacetime Start"]
        );
    }

    #[test]
    fn names_are_not_concatenated_into_paths() {
        let (logger, _sink) = capture();
        let root = SpacetimeEvent::new("Auto1Parent", &logger);
        let child = root.make_child("Auto1Child1");
        let grandchild = child.make_child("Auto1Child1Child1");

        assert_eq!(child.name(), "Auto1Child1");
        assert_eq!(grandchild.name(), "Auto1Child1Child1");
        assert_eq!(grandchild.parent_id(), Some(child.id()));
    }
}
