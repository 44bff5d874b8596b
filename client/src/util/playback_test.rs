use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// =============================================================
// Recording fakes
// =============================================================

type Log = Rc<RefCell<Vec<String>>>;

struct FakeSurface {
    native: bool,
    log: Log,
}

impl MediaSurface for FakeSurface {
    fn supports_native_hls(&self) -> bool {
        self.native
    }

    fn set_source(&self, url: &str) {
        self.log.borrow_mut().push(format!("src={url}"));
    }

    fn clear_source(&self) {
        self.log.borrow_mut().push("clear".to_owned());
    }

    fn reload(&self) {
        self.log.borrow_mut().push("reload".to_owned());
    }
}

struct FakeEngine {
    log: Log,
}

impl AdaptiveEngine for FakeEngine {
    fn load(&self, url: &str) {
        self.log.borrow_mut().push(format!("engine.load={url}"));
    }

    fn destroy(&self) {
        self.log.borrow_mut().push("engine.destroy".to_owned());
    }
}

const URL: &str = "https://media.test/media/videos/hls/720p/7/index.m3u8";

fn surface(native: bool, log: &Log) -> FakeSurface {
    FakeSurface { native, log: Rc::clone(log) }
}

fn with_engine(log: &Log) -> impl FnOnce(&FakeSurface) -> Option<FakeEngine> {
    let log = Rc::clone(log);
    move |_| Some(FakeEngine { log })
}

fn no_engine(_: &FakeSurface) -> Option<FakeEngine> {
    None
}

// =============================================================
// Attach
// =============================================================

#[test]
fn adaptive_engine_preferred_over_native() {
    let log = Log::default();
    let session = PlaybackSession::attach(surface(true, &log), URL, with_engine(&log));
    assert_eq!(session.mode(), PlaybackMode::Adaptive);
    assert_eq!(log.borrow()[0], format!("engine.load={URL}"));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn native_fallback_assigns_manifest() {
    let log = Log::default();
    let session = PlaybackSession::attach(surface(true, &log), URL, no_engine);
    assert_eq!(session.mode(), PlaybackMode::Native);
    assert_eq!(*log.borrow(), [format!("src={URL}")]);
}

#[test]
fn unsupported_environment_degrades_silently() {
    let log = Log::default();
    let session = PlaybackSession::attach(surface(false, &log), URL, no_engine);
    assert_eq!(session.mode(), PlaybackMode::Unsupported);
    assert!(log.borrow().is_empty());
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_destroys_engine_before_clearing_source() {
    let log = Log::default();
    let mut session = PlaybackSession::attach(surface(false, &log), URL, with_engine(&log));
    log.borrow_mut().clear();

    session.teardown();
    assert_eq!(*log.borrow(), ["engine.destroy", "clear", "reload"]);
    assert!(session.is_released());
}

#[test]
fn teardown_runs_once() {
    let log = Log::default();
    let mut session = PlaybackSession::attach(surface(true, &log), URL, with_engine(&log));
    session.teardown();
    session.teardown();
    drop(session);
    assert_eq!(log.borrow().iter().filter(|e| *e == "engine.destroy").count(), 1);
    assert_eq!(log.borrow().iter().filter(|e| *e == "reload").count(), 1);
}

#[test]
fn drop_releases_native_session() {
    let log = Log::default();
    {
        let _session = PlaybackSession::attach(surface(true, &log), URL, no_engine);
    }
    assert_eq!(*log.borrow(), [format!("src={URL}"), "clear".to_owned(), "reload".to_owned()]);
}
