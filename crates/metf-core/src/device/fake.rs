//! Scripted device and virtual clock for client tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::Level;

use super::clock::Clock;
use super::observer::ClientObserver;
use super::transport::{HttpResponse, Transport};
use crate::error::{CoreError, DeviceError};
use crate::protocol::requests::Request;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Request(Request),
    Sleep(Duration),
}

type Responder = Box<dyn Fn(&Request, Duration) -> Result<HttpResponse, CoreError>>;

/// Shared state between a fake transport and its clock.
pub struct Bench {
    start: Instant,
    elapsed: Cell<Duration>,
    events: RefCell<Vec<Event>>,
    records: RefCell<Vec<(Level, String)>>,
    responder: Responder,
}

impl Bench {
    /// The responder sees each request plus the virtual time it arrived at.
    pub fn new<F>(responder: F) -> Rc<Self>
    where
        F: Fn(&Request, Duration) -> Result<HttpResponse, CoreError> + 'static,
    {
        Rc::new(Self {
            start: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
            events: RefCell::new(Vec::new()),
            records: RefCell::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    /// Every request answered with the same status and body.
    pub fn fixed(status: u16, body: &'static str) -> Rc<Self> {
        Self::new(move |_, _| Ok(HttpResponse::new(status, body)))
    }

    /// Answers requests from a list in order, repeating the last one.
    pub fn scripted(bodies: Vec<&'static str>) -> Rc<Self> {
        let next = Cell::new(0usize);
        Self::new(move |_, _| {
            let i = next.get();
            next.set(i + 1);
            let body = bodies.get(i).or(bodies.last()).copied().unwrap_or("");
            Ok(HttpResponse::ok(body))
        })
    }

    /// Every request fails before reaching the device.
    pub fn unreachable() -> Rc<Self> {
        Self::new(|req, _| {
            Err(CoreError::Device(DeviceError::Transport {
                url: format!("http://127.0.0.1:9{}", req.path),
                message: "connection refused".to_string(),
            }))
        })
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Request(r) => Some(r.clone()),
                Event::Sleep(_) => None,
            })
            .collect()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Sleep(d) => Some(*d),
                Event::Request(_) => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records.borrow().iter().map(|(_, m)| m.clone()).collect()
    }
}

/// Handle implementing every client seam over one [`Bench`].
#[derive(Clone)]
pub struct FakeHandle(pub Rc<Bench>);

impl Transport for FakeHandle {
    fn send(&self, request: &Request) -> Result<HttpResponse, CoreError> {
        self.0
            .events
            .borrow_mut()
            .push(Event::Request(request.clone()));
        (self.0.responder)(request, self.0.elapsed.get())
    }
}

impl Clock for FakeHandle {
    fn now(&self) -> Instant {
        self.0.start + self.0.elapsed.get()
    }

    fn sleep(&self, duration: Duration) {
        self.0.events.borrow_mut().push(Event::Sleep(duration));
        self.0.elapsed.set(self.0.elapsed.get() + duration);
    }
}

impl ClientObserver for FakeHandle {
    fn record(&self, level: Level, message: &str) {
        self.0
            .records
            .borrow_mut()
            .push((level, message.to_string()));
    }
}
