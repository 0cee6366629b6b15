//! Recording test doubles for every collaborator trait
//!
//! Each mock is a cheap handle around shared state, so a test keeps one
//! clone for inspection and hands the other to the code under test.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::time::CalendarTime;
use crate::traits::{
    Backlight, Canvas, Clock, Color, DisplayError, Font, IrqCause, NetworkTime, Platform, Point,
    PowerIc, Rect, Rtc, SettingsStorage, Sleep, StorageError, StorageKey, TimeSource, TouchPanel,
    WakeSource,
};

/// Cross-collaborator operations, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Connect,
    Disconnect,
    Query,
    SetTime(CalendarTime),
    Backlight(u8),
    DeepSleep(WakeSource),
}

/// Shared log of operations across mocks
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Op>>>);

impl Journal {
    pub fn push(&self, op: Op) {
        self.0.borrow_mut().push(op);
    }

    pub fn ops(&self) -> Vec<Op> {
        self.0.borrow().clone()
    }

    pub fn count(&self, op: &Op) -> usize {
        self.0.borrow().iter().filter(|o| *o == op).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// Display

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Color),
    Text {
        text: String,
        at: Point,
        font: Font,
        fg: Color,
        bg: Color,
    },
    FillRect(Rect, Color),
    DrawRect(Rect, Color),
    FillCircle(Point, u32, Color),
    DrawCircle(Point, u32, Color),
    Line(Point, Point, Color),
    Triangle(Point, Point, Point, Color),
    Rotation(u8),
}

#[derive(Debug, Clone, Default)]
pub struct MockCanvas {
    calls: Rc<RefCell<Vec<DrawCall>>>,
    fail: Rc<Cell<bool>>,
}

impl MockCanvas {
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    /// Return and forget the recorded calls
    pub fn take(&self) -> Vec<DrawCall> {
        core::mem::take(&mut *self.calls.borrow_mut())
    }

    /// Strings drawn in `color`
    pub fn texts_in(&self, color: Color) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, fg, .. } if *fg == color => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| matches!(c, DrawCall::Text { text, .. } if text == needle))
    }

    /// Make every following call fail
    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    fn record(&mut self, call: DrawCall) -> Result<(), DisplayError> {
        if self.fail.get() {
            return Err(DisplayError::Communication);
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Canvas for MockCanvas {
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        self.record(DrawCall::Clear(color))
    }

    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        font: Font,
        fg: Color,
        bg: Color,
    ) -> Result<(), DisplayError> {
        self.record(DrawCall::Text {
            text: text.to_string(),
            at,
            font,
            fg,
            bg,
        })
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        self.record(DrawCall::FillRect(rect, color))
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        self.record(DrawCall::DrawRect(rect, color))
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), DisplayError> {
        self.record(DrawCall::FillCircle(center, radius, color))
    }

    fn draw_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), DisplayError> {
        self.record(DrawCall::DrawCircle(center, radius, color))
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), DisplayError> {
        self.record(DrawCall::Line(from, to, color))
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) -> Result<(), DisplayError> {
        self.record(DrawCall::Triangle(a, b, c, color))
    }

    fn set_rotation(&mut self, quarter_turns: u8) -> Result<(), DisplayError> {
        self.record(DrawCall::Rotation(quarter_turns))
    }
}

// Touch

#[derive(Debug, Clone, Default)]
pub struct MockTouch {
    point: Rc<Cell<Option<(i16, i16)>>>,
}

impl MockTouch {
    pub fn press(&self, x: i16, y: i16) {
        self.point.set(Some((x, y)));
    }

    pub fn release(&self) {
        self.point.set(None);
    }
}

impl TouchPanel for MockTouch {
    fn poll(&mut self) -> Option<(i16, i16)> {
        self.point.get()
    }
}

// Power IC and backlight

#[derive(Debug, Clone)]
pub struct MockPower {
    millivolts: Rc<Cell<u16>>,
    charging: Rc<Cell<bool>>,
    cause: Rc<Cell<IrqCause>>,
    clears: Rc<Cell<u32>>,
}

impl Default for MockPower {
    fn default() -> Self {
        Self {
            millivolts: Rc::new(Cell::new(4200)),
            charging: Rc::new(Cell::new(false)),
            cause: Rc::new(Cell::new(IrqCause::NONE)),
            clears: Rc::new(Cell::new(0)),
        }
    }
}

impl MockPower {
    pub fn set_millivolts(&self, mv: u16) {
        self.millivolts.set(mv);
    }

    pub fn set_charging(&self, charging: bool) {
        self.charging.set(charging);
    }

    pub fn latch(&self, cause: IrqCause) {
        self.cause.set(cause);
    }

    pub fn clears(&self) -> u32 {
        self.clears.get()
    }
}

impl PowerIc for MockPower {
    fn battery_voltage_mv(&mut self) -> u16 {
        self.millivolts.get()
    }

    fn is_charging(&mut self) -> bool {
        self.charging.get()
    }

    fn read_irq_cause(&mut self) -> IrqCause {
        self.cause.get()
    }

    fn clear_irq(&mut self) {
        self.cause.set(IrqCause::NONE);
        self.clears.set(self.clears.get() + 1);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockBacklight {
    pub journal: Journal,
    level: Rc<Cell<u8>>,
}

impl MockBacklight {
    pub fn level(&self) -> u8 {
        self.level.get()
    }
}

impl Backlight for MockBacklight {
    fn set_level(&mut self, level: u8) {
        self.level.set(level);
        self.journal.push(Op::Backlight(level));
    }
}

// Network

/// Scripted WiFi link and time client
#[derive(Debug, Clone, Default)]
pub struct MockNetwork {
    pub journal: Journal,
    /// Status polls that report "down" before the link comes up, `None` = never
    connect_after: Rc<Cell<Option<u32>>>,
    polls: Rc<Cell<u32>>,
    connecting: Rc<Cell<bool>>,
    /// Answers for successive queries; exhausted means `None`
    answers: Rc<RefCell<VecDeque<Option<CalendarTime>>>>,
    queries: Rc<Cell<u32>>,
    last_ssid: Rc<RefCell<String>>,
}

impl MockNetwork {
    /// Link comes up after `polls` status checks
    pub fn connects_after(polls: u32) -> Self {
        let net = Self::default();
        net.connect_after.set(Some(polls));
        net
    }

    /// Link never comes up
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn answer(&self, time: Option<CalendarTime>) {
        self.answers.borrow_mut().push_back(time);
    }

    pub fn queries(&self) -> u32 {
        self.queries.get()
    }

    pub fn polls(&self) -> u32 {
        self.polls.get()
    }

    pub fn last_ssid(&self) -> String {
        self.last_ssid.borrow().clone()
    }
}

impl NetworkTime for MockNetwork {
    fn begin_connect(&mut self, ssid: &str, _password: &str) {
        self.journal.push(Op::Connect);
        *self.last_ssid.borrow_mut() = ssid.to_string();
        self.connecting.set(true);
        self.polls.set(0);
    }

    fn is_connected(&mut self) -> bool {
        if !self.connecting.get() {
            return false;
        }
        let polls = self.polls.get();
        self.polls.set(polls + 1);
        matches!(self.connect_after.get(), Some(n) if polls >= n)
    }

    fn disconnect(&mut self) {
        self.journal.push(Op::Disconnect);
        self.connecting.set(false);
    }

    fn query_time(&mut self, source: &TimeSource<'_>) -> Option<CalendarTime> {
        assert!(!source.servers.is_empty());
        self.journal.push(Op::Query);
        self.queries.set(self.queries.get() + 1);
        self.answers.borrow_mut().pop_front().flatten()
    }
}

// RTC

#[derive(Debug, Clone, Default)]
pub struct MockRtc {
    pub journal: Journal,
    time: Rc<Cell<CalendarTime>>,
}

impl MockRtc {
    pub fn at(time: CalendarTime) -> Self {
        let rtc = Self::default();
        rtc.time.set(time);
        rtc
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            ..Self::default()
        }
    }

    pub fn set(&self, time: CalendarTime) {
        self.time.set(time);
    }

    pub fn writes(&self) -> Vec<CalendarTime> {
        self.journal
            .ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::SetTime(t) => Some(t),
                _ => None,
            })
            .collect()
    }
}

impl Rtc for MockRtc {
    fn set_date_time(&mut self, time: &CalendarTime) {
        self.journal.push(Op::SetTime(*time));
        self.time.set(*time);
    }

    fn now(&mut self) -> CalendarTime {
        self.time.get()
    }
}

// Sleep and clock

#[derive(Debug, Clone, Default)]
pub struct MockSleep {
    pub journal: Journal,
}

impl MockSleep {
    pub fn requests(&self) -> usize {
        self.journal
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::DeepSleep(_)))
            .count()
    }
}

impl Sleep for MockSleep {
    fn enter_deep_sleep(&mut self, wake: WakeSource) {
        self.journal.push(Op::DeepSleep(wake));
    }
}

/// Manual clock; delays advance it
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
    delayed: Rc<Cell<u64>>,
}

impl MockClock {
    pub fn at(ms: u64) -> Self {
        let clock = Self::default();
        clock.now.set(ms);
        clock
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Total time spent in `delay_ms`
    pub fn delayed(&self) -> u64 {
        self.delayed.get()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance(ms as u64);
        self.delayed.set(self.delayed.get() + ms as u64);
    }
}

// Storage

#[derive(Debug, Clone, Default)]
pub struct MockStorage {
    slots: Rc<RefCell<BTreeMap<u8, Vec<u8>>>>,
    fail: Rc<Cell<bool>>,
}

impl MockStorage {
    pub fn put(&self, key: StorageKey, data: &[u8]) {
        self.slots.borrow_mut().insert(key.as_u8(), data.to_vec());
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl SettingsStorage for MockStorage {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        if self.fail.get() {
            return Err(StorageError::Io);
        }
        let slots = self.slots.borrow();
        let data = slots.get(&key.as_u8()).ok_or(StorageError::NotFound)?;
        let dst = buffer.get_mut(..data.len()).ok_or(StorageError::BufferTooSmall)?;
        dst.copy_from_slice(data);
        Ok(data.len())
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        if self.fail.get() {
            return Err(StorageError::Io);
        }
        self.put(key, data);
        Ok(())
    }
}

/// Platform built entirely from mocks
pub struct MockPlatform;

impl Platform for MockPlatform {
    type Display = MockCanvas;
    type Touch = MockTouch;
    type Power = MockPower;
    type Backlight = MockBacklight;
    type Network = MockNetwork;
    type Rtc = MockRtc;
    type Sleep = MockSleep;
    type Clock = MockClock;
    type Storage = MockStorage;
}
