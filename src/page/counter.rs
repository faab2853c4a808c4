/// Total counter animation time.
pub const COUNTER_DURATION_MS: f64 = 2000.0;
/// Assumed frame length, ~60 fps.
pub const FRAME_MS: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterFrame {
    Running(String),
    Done(String),
}

impl CounterFrame {
    pub fn text(&self) -> &str {
        match self {
            CounterFrame::Running(t) | CounterFrame::Done(t) => t,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, CounterFrame::Done(_))
    }
}

/// Counts a stat like `150+` up from zero, one increment per frame, and lands
/// on the literal target with its suffix restored.
#[derive(Debug, Clone)]
pub struct StatCounter {
    target: i64,
    suffix: &'static str,
    current: f64,
    increment: f64,
}

impl StatCounter {
    /// `None` when the text does not start with an integer.
    pub fn parse(text: &str) -> Option<Self> {
        let target = parse_leading_int(text)?;
        let suffix = if text.contains('+') {
            "+"
        } else if text.contains('%') {
            "%"
        } else {
            ""
        };
        Some(Self {
            target,
            suffix,
            current: 0.0,
            increment: target as f64 / (COUNTER_DURATION_MS / FRAME_MS),
        })
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(format!("{}{}", self.current.floor() as i64, self.suffix))
        } else {
            CounterFrame::Done(format!("{}{}", self.target, self.suffix))
        }
    }
}

/// Integer prefix after optional leading whitespace and sign.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}
