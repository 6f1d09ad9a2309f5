//! Synthetic monitoring log lines.
//!
//! `FakeLogGenerator` picks a template from a fixed catalog, fills its
//! numeric slots from the template's own ranges and prefixes a wall-clock
//! timestamp. `FakeLineBuffer` keeps the most recent lines for display.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::markup::{StyledLine, Tint};

const COUNT: RangeInclusive<u32> = 1..=100;
const WHOLE: RangeInclusive<u32> = 10..=99;
const TENTH: RangeInclusive<u32> = 0..=9;

/// A log message template and the rule for filling its numeric slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    NoArgs(&'static str),
    OneArg {
        parts: [&'static str; 2],
        range: RangeInclusive<u32>,
    },
    TwoArgs {
        parts: [&'static str; 3],
        ranges: [RangeInclusive<u32>; 2],
    },
}

impl Template {
    /// Renders the message with random values for every slot.
    pub fn fill<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            Template::NoArgs(text) => (*text).to_string(),
            Template::OneArg { parts, range } => {
                let value = rng.gen_range(range.clone());
                format!("{}{value}{}", parts[0], parts[1])
            }
            Template::TwoArgs { parts, ranges } => {
                let first = rng.gen_range(ranges[0].clone());
                let second = rng.gen_range(ranges[1].clone());
                format!("{}{first}{}{second}{}", parts[0], parts[1], parts[2])
            }
        }
    }
}

const fn one(before: &'static str, after: &'static str) -> Template {
    Template::OneArg {
        parts: [before, after],
        range: COUNT,
    }
}

const fn decimal(before: &'static str, after: &'static str) -> Template {
    Template::TwoArgs {
        parts: [before, ".", after],
        ranges: [WHOLE, TENTH],
    }
}

/// Message catalog of the fake production monitor.
pub const CATALOG: &[Template] = &[
    Template::NoArgs("├─ [INFO] Processing microservice requests..."),
    one("├─ [DEBUG] Database connection pool: ", "/20 active"),
    decimal("├─ [WARN] Memory usage: ", "%"),
    decimal("├─ [INFO] Redis cache hit ratio: ", "%"),
    Template::NoArgs("├─ [DEBUG] Executing SQL: SELECT * FROM user_sessions"),
    one("├─ [INFO] API Gateway response time: ", "ms"),
    one("├─ [WARN] Queue depth: ", " messages pending"),
    Template::NoArgs("├─ [DEBUG] JWT token validation successful"),
    one("├─ [INFO] Elasticsearch index updated: ", " documents"),
    one("├─ [DEBUG] Kafka consumer lag: ", " messages"),
    one("├─ [INFO] Container health check passed: app-server-", ""),
    one("├─ [WARN] CPU threshold exceeded: ", "% on node-3"),
    one("├─ [DEBUG] Load balancer distributing to ", " backend servers"),
    decimal("├─ [INFO] Backup completed: ", " GB transferred"),
    one("├─ [DEBUG] WebSocket connections: ", " active"),
    Template::NoArgs("├─ [INFO] CDN cache refresh initiated for region: us-east-1"),
    one("├─ [WARN] Disk I/O latency: ", "ms (threshold: 100ms)"),
    one("├─ [DEBUG] Auto-scaling triggered: launching ", " new instances"),
    Template::NoArgs("├─ [INFO] SSL certificate renewal scheduled"),
    Template::NoArgs("├─ [DEBUG] Circuit breaker status: CLOSED"),
];

/// Produces fake log lines and the pauses between them.
#[derive(Debug)]
pub struct FakeLogGenerator<R = StdRng> {
    rng: R,
}

impl FakeLogGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for FakeLogGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FakeLogGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// A line stamped with the current local time.
    pub fn next_line(&mut self) -> StyledLine {
        self.line_at(Local::now().naive_local())
    }

    /// A line stamped with `now`.
    pub fn line_at(&mut self, now: NaiveDateTime) -> StyledLine {
        let message = CATALOG
            .choose(&mut self.rng)
            .map(|template| template.fill(&mut self.rng))
            .unwrap_or_default();

        let mut line = String::with_capacity(message.len() + 40);
        let _ = write!(
            line,
            "{}{}{} {message}",
            Tint::Gray,
            now.format("%Y-%m-%d %H:%M:%S"),
            Tint::White
        );
        StyledLine::new(line)
    }

    /// A random pause in `min..=max`.
    pub fn next_interval(&mut self, min: Duration, max: Duration) -> Duration {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

impl<R: Rng> Iterator for FakeLogGenerator<R> {
    type Item = StyledLine;

    fn next(&mut self) -> Option<StyledLine> {
        Some(self.next_line())
    }
}

/// Bounded FIFO of the most recent fake lines.
#[derive(Debug, Clone)]
pub struct FakeLineBuffer {
    lines: VecDeque<StyledLine>,
    capacity: usize,
}

impl FakeLineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends a line, evicting the oldest ones beyond capacity.
    pub fn push(&mut self, line: StyledLine) {
        self.lines.push_back(line);
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    /// Lines from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &StyledLine> + '_ {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
