use crate::conf::ConfigError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt::{self, Write};

/// Renders epoch milliseconds for the `timestamp` field.
///
/// Without a pattern the raw number is kept, which is both smaller and cheaper than a
/// string. The pattern is parsed once into chrono items; formatting is read-only and
/// safe to share.
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    pattern: Option<CompiledPattern>,
    zone: Zone,
    zone_id: String,
}

/// The zone timestamps are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Fixed(FixedOffset),
    /// Region zone; its offset follows the tz database, daylight saving included.
    Named(Tz),
}

impl Zone {
    /// Offset in effect at `epoch_millis`.
    pub fn offset_at(&self, epoch_millis: i64) -> Option<FixedOffset> {
        let utc = DateTime::from_timestamp_millis(epoch_millis)?;
        Some(match self {
            Zone::Fixed(offset) => *offset,
            Zone::Named(tz) => utc.with_timezone(tz).offset().fix(),
        })
    }
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
enum Segment {
    Items(Vec<Item<'static>>),
    /// Fraction of second truncated to this many digits.
    Fraction(u32),
    Offset(OffsetStyle),
    ZoneName,
}

/// A formatted timestamp: either the untouched epoch value or rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedTimestamp {
    Millis(i64),
    Text(String),
}

impl TimestampFormatter {
    pub fn new(pattern: Option<&str>, time_zone: &str) -> Result<Self, ConfigError> {
        let zone = parse_time_zone(time_zone)?;
        let pattern = pattern.map(compile_pattern).transpose()?;

        Ok(Self {
            pattern,
            zone,
            zone_id: time_zone.trim().to_string(),
        })
    }

    /// Numeric output in UTC.
    pub fn epoch_millis() -> Self {
        Self {
            pattern: None,
            zone: Zone::Fixed(utc()),
            zone_id: "UTC".to_string(),
        }
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|p| p.source.as_str())
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn format(&self, epoch_millis: i64) -> FormattedTimestamp {
        let Some(pattern) = &self.pattern else {
            return FormattedTimestamp::Millis(epoch_millis);
        };

        // Outside chrono's calendar range.
        let Some(utc) = DateTime::from_timestamp_millis(epoch_millis) else {
            return FormattedTimestamp::Millis(epoch_millis);
        };

        let text = match self.zone {
            Zone::Fixed(offset) => render(pattern, &utc.with_timezone(&offset), || {
                self.zone_id.clone()
            }),
            Zone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                render(pattern, &local, || local.offset().to_string())
            }
        };
        FormattedTimestamp::Text(text)
    }
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self::epoch_millis()
    }
}

impl From<FormattedTimestamp> for Value {
    fn from(ts: FormattedTimestamp) -> Self {
        match ts {
            FormattedTimestamp::Millis(ms) => Value::from(ms),
            FormattedTimestamp::Text(s) => Value::String(s),
        }
    }
}

impl Serialize for FormattedTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FormattedTimestamp::Millis(ms) => serializer.serialize_i64(*ms),
            FormattedTimestamp::Text(s) => serializer.serialize_str(s),
        }
    }
}

fn render<Z>(
    pattern: &CompiledPattern,
    local: &DateTime<Z>,
    zone_name: impl Fn() -> String,
) -> String
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    let mut out = String::with_capacity(32);

    for segment in &pattern.segments {
        match segment {
            Segment::Items(items) => {
                let _ = write!(out, "{}", local.format_with_items(items.iter()));
            }
            Segment::Fraction(digits) => {
                // Leap seconds report nanos past one billion.
                let nanos = local.nanosecond() % 1_000_000_000;
                let value = nanos / 10u32.pow(9 - digits);
                let _ = write!(out, "{value:0width$}", width = *digits as usize);
            }
            Segment::Offset(style) => {
                style.render(local.offset().fix().local_minus_utc(), &mut out);
            }
            Segment::ZoneName => out.push_str(&zone_name()),
        }
    }

    out
}

//-----------------------------------------------------------------------------
// Time zones
//-----------------------------------------------------------------------------

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Accepts `UTC`, `GMT`, `UT`, `Z`, fixed offsets such as `GMT+01:00`, `+0530` or
/// `UTC-8`, and tz database regions such as `Europe/Berlin`.
pub(crate) fn parse_time_zone(raw: &str) -> Result<Zone, ConfigError> {
    let trimmed = raw.trim();

    if let Some(offset) = parse_fixed_offset(trimmed) {
        return Ok(Zone::Fixed(offset));
    }

    trimmed
        .parse::<Tz>()
        .map(Zone::Named)
        .map_err(|_| ConfigError::InvalidTimeZone {
            zone: raw.to_string(),
        })
}

fn parse_fixed_offset(zone: &str) -> Option<FixedOffset> {
    if zone.eq_ignore_ascii_case("z") {
        return Some(utc());
    }

    let offset = ["GMT", "UTC", "UT"]
        .iter()
        .find_map(|prefix| strip_prefix_ignore_case(zone, prefix))
        .unwrap_or(zone);

    if offset.is_empty() {
        return (!zone.is_empty()).then(utc);
    }

    let (sign, digits) = match offset.as_bytes()[0] {
        b'+' => (1, &offset[1..]),
        b'-' => (-1, &offset[1..]),
        _ => return None,
    };

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h, m),
        Some(_) => return None,
        None if digits.len() == 4 => digits.split_at(2),
        None if digits.len() <= 2 => (digits, "0"),
        None => return None,
    };

    let hours = parse_digits(hours)?;
    let minutes = parse_digits(minutes)?;
    // Offsets are capped at +/-18:00.
    if hours > 18 || minutes > 59 || (hours == 18 && minutes > 0) {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

fn parse_digits(s: &str) -> Option<i32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

//-----------------------------------------------------------------------------
// Offsets
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OffsetStyle {
    /// `+01`, or `+0130` when minutes are set.
    Hour { zulu: bool },
    /// `+0100`
    Basic { zulu: bool },
    /// `+01:00`
    Extended { zulu: bool },
    /// `GMT+01:00`, plain `GMT` at zero.
    Localized,
    /// `GMT+1`, `GMT+5:30`
    LocalizedShort,
}

impl OffsetStyle {
    fn render(self, secs: i32, out: &mut String) {
        let sign = if secs < 0 { '-' } else { '+' };
        let hours = secs.abs() / 3600;
        let minutes = (secs.abs() % 3600) / 60;

        let _ = match self {
            Self::Hour { zulu: true } | Self::Basic { zulu: true } | Self::Extended { zulu: true }
                if secs == 0 =>
            {
                out.write_str("Z")
            }
            Self::Localized | Self::LocalizedShort if secs == 0 => out.write_str("GMT"),
            Self::Hour { .. } if minutes == 0 => write!(out, "{sign}{hours:02}"),
            Self::Hour { .. } | Self::Basic { .. } => write!(out, "{sign}{hours:02}{minutes:02}"),
            Self::Extended { .. } => write!(out, "{sign}{hours:02}:{minutes:02}"),
            Self::Localized => write!(out, "GMT{sign}{hours:02}:{minutes:02}"),
            Self::LocalizedShort if minutes == 0 => write!(out, "GMT{sign}{hours}"),
            Self::LocalizedShort => write!(out, "GMT{sign}{hours}:{minutes:02}"),
        };
    }
}

//-----------------------------------------------------------------------------
// Pattern compilation
//-----------------------------------------------------------------------------

enum Token {
    Strftime(&'static str),
    Fraction(u32),
    Offset(OffsetStyle),
    ZoneName,
}

/// Compiles a date-time pattern (`yyyy-MM-dd'T'HH:mm:ss.SSSZ`) into chrono items plus
/// the fields chrono cannot print the same way (fractions, offsets, zone names).
fn compile_pattern(pattern: &str) -> Result<CompiledPattern, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidTimestampPattern {
        pattern: pattern.to_string(),
        reason,
    };

    let chars: Vec<char> = pattern.chars().collect();
    let mut segments = Vec::new();
    let mut strftime = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            i += 1;
            if chars.get(i) == Some(&'\'') {
                strftime.push('\'');
                i += 1;
                continue;
            }
            loop {
                match chars.get(i) {
                    None => return Err(invalid("unterminated quoted text".to_string())),
                    Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                        strftime.push('\'');
                        i += 2;
                    }
                    Some('\'') => {
                        i += 1;
                        break;
                    }
                    Some(ch) => {
                        push_literal(&mut strftime, *ch);
                        i += 1;
                    }
                }
            }
            continue;
        }

        if !c.is_ascii_alphabetic() {
            match c {
                // Optional sections always print: every field is present.
                '[' | ']' => {}
                '{' | '}' | '#' => return Err(invalid(format!("reserved character '{c}'"))),
                _ => push_literal(&mut strftime, c),
            }
            i += 1;
            continue;
        }

        let mut width = 1;
        while chars.get(i + width) == Some(&c) {
            width += 1;
        }
        i += width;

        let token = letter_token(c, width).ok_or_else(|| {
            invalid(format!("unsupported field '{}'", c.to_string().repeat(width)))
        })?;

        let segment = match token {
            Token::Strftime(spec) => {
                strftime.push_str(spec);
                continue;
            }
            Token::Fraction(digits) => Segment::Fraction(digits),
            Token::Offset(style) => Segment::Offset(style),
            Token::ZoneName => Segment::ZoneName,
        };
        flush_items(&mut strftime, &mut segments).map_err(&invalid)?;
        segments.push(segment);
    }
    flush_items(&mut strftime, &mut segments).map_err(&invalid)?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        segments,
    })
}

fn flush_items(strftime: &mut String, segments: &mut Vec<Segment>) -> Result<(), String> {
    if strftime.is_empty() {
        return Ok(());
    }

    let items = StrftimeItems::new(strftime.as_str())
        .parse_to_owned()
        .map_err(|e| format!("pattern does not compile: {e}"))?;
    segments.push(Segment::Items(items));
    strftime.clear();
    Ok(())
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn letter_token(letter: char, width: usize) -> Option<Token> {
    let spec = match (letter, width) {
        ('y' | 'u', 2) => "%y",
        ('y' | 'u', _) => "%Y",
        ('M' | 'L', 1) => "%-m",
        ('M' | 'L', 2) => "%m",
        ('M' | 'L', 3) => "%b",
        ('M' | 'L', 4) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('D', 1) => "%-j",
        ('D', 3) => "%j",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('a', 1) => "%p",
        ('E', 1..=3) => "%a",
        ('E', 4) => "%A",
        ('S', 1..=9) => return Some(Token::Fraction(width as u32)),
        ('Z', 1..=3) => return Some(Token::Offset(OffsetStyle::Basic { zulu: false })),
        ('Z', 4) | ('O', 4) => return Some(Token::Offset(OffsetStyle::Localized)),
        ('Z', 5) => return Some(Token::Offset(OffsetStyle::Extended { zulu: true })),
        ('O', 1) => return Some(Token::Offset(OffsetStyle::LocalizedShort)),
        ('X', 1) => return Some(Token::Offset(OffsetStyle::Hour { zulu: true })),
        ('X', 2) => return Some(Token::Offset(OffsetStyle::Basic { zulu: true })),
        ('X', 3) => return Some(Token::Offset(OffsetStyle::Extended { zulu: true })),
        ('x', 1) => return Some(Token::Offset(OffsetStyle::Hour { zulu: false })),
        ('x', 2) => return Some(Token::Offset(OffsetStyle::Basic { zulu: false })),
        ('x', 3) => return Some(Token::Offset(OffsetStyle::Extended { zulu: false })),
        ('z', 1..=4) => return Some(Token::ZoneName),
        _ => return None,
    };
    Some(Token::Strftime(spec))
}
