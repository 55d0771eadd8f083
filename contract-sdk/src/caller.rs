use serde::{Deserialize, Serialize};

use crate::{Address, Event};

/// What a contract needs from the environment executing it.
///
/// The host supplies the identity of the current caller and collects emitted events. It is also
/// responsible for the transaction boundary: when a contract entry point returns an error, the
/// host discards every state change and event produced during that call.
pub trait Host {
    fn caller(&self) -> Address;
    fn emit(&mut self, event: Event);
}

/// ExecutionContext is an in-memory [Host] for a single call.
///
/// Events are buffered until the host decides to keep them with [ExecutionContext::take_events]
/// or drops the context with the failed call.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    pub caller: Address,
    pub events: Vec<Event>,
}

impl ExecutionContext {
    pub fn new(caller: Address) -> Self {
        ExecutionContext {
            caller,
            events: Vec::new(),
        }
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl Host for ExecutionContext {
    fn caller(&self) -> Address {
        self.caller
    }

    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}
