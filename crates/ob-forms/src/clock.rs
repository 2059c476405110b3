use chrono::{Local, NaiveDateTime};

/// Source of wall-clock time for copy timestamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local time of the machine running the kiosk.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug)]
pub struct FixedClock {
    at: std::cell::Cell<NaiveDateTime>,
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at: std::cell::Cell::new(at) }
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.at.set(at);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.at.set(self.at.get() + chrono::Duration::seconds(secs));
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
