use crate::{
    duration::Duration,
    error::Error,
    unit::{self, Unit},
};

/// A parser for ISO 8601 durations.
#[derive(Debug)]
pub(super) struct DurationParser {
    /// There are currently no configuration options for this parser.
    _priv: (),
}

impl DurationParser {
    /// Create a new duration parser with the default configuration.
    pub(super) const fn new() -> DurationParser {
        DurationParser { _priv: () }
    }

    // Duration :::
    //   Sign[opt] DurationDesignator DateSegment[opt] TimeSegment[opt]
    //
    // The designators are matched ASCII case insensitively throughout.
    pub(super) fn parse_duration(
        &self,
        input: &[u8],
    ) -> Result<Duration, Error> {
        // A leading `-` negates every unit that ends up present. It is
        // never an error on its own: the prefix check below runs first
        // regardless of what follows the sign.
        let (negative, mut pos) = match input.first() {
            Some(&b'-') => (true, 1),
            _ => (false, 0),
        };
        if !matches!(input.get(pos), Some(b'P' | b'p')) {
            return Err(Error::prefix_missing());
        }
        pos += 1;

        // The *first* `T` splits the date segment from the time segment.
        // Which unit a designator maps to depends only on its side of the
        // split, never on the designator itself.
        let rest = &input[pos..];
        let (date, time, time_pos) =
            match rest.iter().position(|&b| matches!(b, b'T' | b't')) {
                None => (rest, &[][..], input.len()),
                Some(i) => (&rest[..i], &rest[i + 1..], pos + i + 1),
            };

        let date_units = self.parse_segment(date, pos, unit::DATE_UNITS)?;
        let time_units =
            self.parse_segment(time, time_pos, unit::TIME_UNITS)?;

        let duration = date_units + time_units;
        Ok(if negative { duration * -1 } else { duration })
    }

    /// Scans `<value><designator>` pairs until the segment is exhausted.
    ///
    /// An empty segment yields an empty duration, which is how a duration
    /// with only a date part, only a time part or neither parses
    /// successfully. A unit repeated within one parse overwrites the
    /// earlier value.
    ///
    /// `base` is the offset of the segment within the original input. It is
    /// used only to report error positions against the full string.
    fn parse_segment(
        &self,
        input: &[u8],
        base: usize,
        mapping: &[(u8, Unit)],
    ) -> Result<Duration, Error> {
        let mut duration = Duration::new();
        let mut i = 0;
        while i < input.len() {
            let (value, next) = self.parse_unit_value(input, i, base)?;
            i = next;

            let Some(unit) = input
                .get(i)
                .and_then(|&byte| unit::designator_unit(mapping, byte))
            else {
                return Err(Error::invalid_character(base + i));
            };
            i += 1;

            duration = duration.with_unit(unit, value);
        }
        Ok(duration)
    }

    /// Scans the longest signed integer literal starting at `at`, returning
    /// the value and the position just past it.
    ///
    /// A literal with a non-zero fractional part is rejected. A fractional
    /// part that is exactly zero (as in `1.0`) is accepted and dropped. A
    /// `.` not followed by a digit is not part of the literal at all, and
    /// ends up rejected by the designator lookup instead.
    ///
    /// Values with more magnitude than an `i64` can carry saturate at the
    /// `i64` boundaries.
    fn parse_unit_value(
        &self,
        input: &[u8],
        at: usize,
        base: usize,
    ) -> Result<(i64, usize), Error> {
        let mut i = at;
        let negative = input.get(i) == Some(&b'-');
        if negative {
            i += 1;
        }

        let digits = i;
        while input.get(i).map_or(false, u8::is_ascii_digit) {
            i += 1;
        }
        if i == digits {
            // Nothing numeric here, not even after a sign.
            return Err(Error::invalid_character(base + at));
        }

        // Accumulating toward negative infinity for negative literals means
        // `i64::MIN` parses exactly instead of saturating one short.
        let mut value: i64 = 0;
        for &byte in &input[digits..i] {
            let digit = i64::from(byte - b'0');
            value = if negative {
                value.saturating_mul(10).saturating_sub(digit)
            } else {
                value.saturating_mul(10).saturating_add(digit)
            };
        }

        if input.get(i) == Some(&b'.')
            && input.get(i + 1).map_or(false, u8::is_ascii_digit)
        {
            let mut nonzero = false;
            i += 1;
            while let Some(&byte) = input.get(i) {
                if !byte.is_ascii_digit() {
                    break;
                }
                if byte != b'0' {
                    nonzero = true;
                }
                i += 1;
            }
            if nonzero {
                return Err(Error::fractional_value());
            }
        }
        Ok((value, i))
    }
}
