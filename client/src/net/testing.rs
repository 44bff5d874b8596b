//! Scripted in-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};

#[derive(Clone, Debug)]
enum Scripted {
    Respond(u16, String),
    Fail,
}

#[derive(Default)]
struct FakeState {
    queued: HashMap<String, VecDeque<Scripted>>,
    fallback: HashMap<String, Scripted>,
    gates: HashMap<String, VecDeque<oneshot::Receiver<()>>>,
    calls: Vec<HttpRequest>,
}

/// Answers by path: queued one-shot replies first, then the fallback, then 404.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    state: Rc<RefCell<FakeState>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a single reply for the next call to `path`.
    pub(crate) fn respond(&self, path: &str, status: u16, body: &str) -> &Self {
        self.state
            .borrow_mut()
            .queued
            .entry(path.to_owned())
            .or_default()
            .push_back(Scripted::Respond(status, body.to_owned()));
        self
    }

    /// Reply used once the queue for `path` is empty.
    pub(crate) fn always(&self, path: &str, status: u16, body: &str) -> &Self {
        self.state
            .borrow_mut()
            .fallback
            .insert(path.to_owned(), Scripted::Respond(status, body.to_owned()));
        self
    }

    /// Queue a transport failure for the next call to `path`.
    pub(crate) fn fail(&self, path: &str) -> &Self {
        self.state
            .borrow_mut()
            .queued
            .entry(path.to_owned())
            .or_default()
            .push_back(Scripted::Fail);
        self
    }

    /// Hold the next call to `path` until the returned sender fires or drops.
    pub(crate) fn gate(&self, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().gates.entry(path.to_owned()).or_default().push_back(rx);
        tx
    }

    pub(crate) fn calls(&self, path: &str) -> usize {
        self.state.borrow().calls.iter().filter(|r| r.path == path).count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.state.borrow().calls.len()
    }

    pub(crate) fn last_request(&self, path: &str) -> Option<HttpRequest> {
        self.state.borrow().calls.iter().rev().find(|r| r.path == path).cloned()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let path = request.path.clone();
        let gate = {
            let mut state = self.state.borrow_mut();
            state.calls.push(request);
            state.gates.get_mut(&path).and_then(VecDeque::pop_front)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let scripted = {
            let mut state = self.state.borrow_mut();
            let queued = state.queued.get_mut(&path).and_then(VecDeque::pop_front);
            queued.or_else(|| state.fallback.get(&path).cloned())
        };
        match scripted {
            Some(Scripted::Respond(status, body)) => Ok(HttpResponse { status, body }),
            Some(Scripted::Fail) => Err(ApiError::Transport(format!("scripted failure for {path}"))),
            None => Ok(HttpResponse { status: 404, body: String::new() }),
        }
    }
}
