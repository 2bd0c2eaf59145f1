//! Command bus for layout notifications.
//!
//! A finished layout pass emits a [`LAYOUT_COMMAND`] carrying the root's
//! `node_id`. Listeners (typically a render layer) subscribe by command name,
//! either with a callback or through a channel.
//!
//! Emitting is fire-and-forget: handlers run inline on the emitting thread,
//! and a channel whose receiver was dropped is skipped silently. No lock is
//! held while handlers run, so they may subscribe or emit on the same bus;
//! a handler added during an emit first sees the next one.

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use log::trace;

/// Command emitted when a tree's geometry is ready.
pub const LAYOUT_COMMAND: &str = "layout";

/// A command as delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusEvent {
    pub command: String,
    /// External `node_id` of the node the command is about
    pub node_id: Option<String>,
}

type Handler = Arc<dyn Fn(&BusEvent) + Send + Sync>;

/// Routes commands to their subscribers.
#[derive(Default)]
pub struct CommandBus {
    handlers: RwLock<IndexMap<String, Vec<Handler>>>,
}

impl CommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `handler` for every future `command`.
    pub fn subscribe<F>(&self, command: impl Into<String>, handler: F)
    where
        F: Fn(&BusEvent) + Send + Sync + 'static,
    {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(command.into())
            .or_default()
            .push(Arc::new(handler));
    }

    /// Receive every future `command` on a channel.
    pub fn channel(&self, command: impl Into<String>) -> Receiver<BusEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribe(command, move |event: &BusEvent| {
            let _ = tx.send(event.clone());
        });
        rx
    }

    /// Deliver `command` to its subscribers.
    pub fn emit(&self, command: &str, node_id: Option<String>) {
        let subscribers: Vec<Handler> = match self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(command)
        {
            Some(subscribers) => subscribers.clone(),
            None => {
                trace!("no subscribers for {command:?}");
                return;
            }
        };
        let event = BusEvent {
            command: command.to_string(),
            node_id,
        };
        for handler in &subscribers {
            handler(&event);
        }
    }

    /// Number of subscribers of `command`.
    pub fn subscriber_count(&self, command: &str) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(command)
            .map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for CommandBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let counts: Vec<_> = handlers.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        f.debug_struct("CommandBus").field("handlers", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_channel_receives_layout() {
        let bus = CommandBus::new();
        let rx = bus.channel(LAYOUT_COMMAND);
        bus.emit(LAYOUT_COMMAND, Some("root-1".into()));
        assert_eq!(
            rx.try_recv().unwrap(),
            BusEvent { command: "layout".into(), node_id: Some("root-1".into()) }
        );
    }

    #[test]
    fn test_only_matching_command_is_delivered() {
        let bus = CommandBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        bus.subscribe("render", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        bus.emit(LAYOUT_COMMAND, None);
        bus.emit("render", None);
        bus.emit("render", None);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(bus.subscriber_count("render"), 1);
        assert_eq!(bus.subscriber_count(LAYOUT_COMMAND), 0);
    }

    #[test]
    fn test_handlers_may_use_the_bus() {
        let bus = Arc::new(CommandBus::new());
        let rx = bus.channel("render");
        let inner = bus.clone();
        bus.subscribe(LAYOUT_COMMAND, move |event: &BusEvent| {
            inner.subscribe("render", |_| {});
            inner.emit("render", event.node_id.clone());
        });

        bus.emit(LAYOUT_COMMAND, Some("root".into()));
        assert_eq!(rx.try_recv().unwrap().node_id.as_deref(), Some("root"));
        assert_eq!(bus.subscriber_count("render"), 2);
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let bus = CommandBus::new();
        drop(bus.channel(LAYOUT_COMMAND));
        bus.emit(LAYOUT_COMMAND, None);
    }
}
