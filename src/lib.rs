/*!
A codec for [ISO 8601 durations] with calendrical units.

This crate converts between a structured [`Duration`] value, which maps each
of the seven units years through seconds to an optional signed integer
magnitude, and the textual `P…T…` notation. The transform is purely
syntactic: no calendar-aware normalization ever happens, so 60 minutes stays
60 minutes and a week is never turned into days.

The two entry points are [`parse`] and [`format`]:

```
use isoduration::Duration;

let duration = isoduration::parse("P6Y2M2W2DT4H44M22S")?;
assert_eq!(duration.get_years(), Some(6));
assert_eq!(duration.get_seconds(), Some(22));

// All-units mode renders absent units as zero.
assert_eq!(
    isoduration::format(&duration, false),
    "P6Y2M2W2DT4H44M22S",
);
// Omit mode skips units that are zero or absent.
let partial = Duration::new().years(1).hours(0);
assert_eq!(isoduration::format(&partial, true), "P1Y");
# Ok::<(), isoduration::Error>(())
```

A unit that was never assigned a magnitude is *absent*, which is not the
same thing as a unit assigned `0`. The all-units formatting mode renders
both as `0`, while the omit mode skips both; parsing only ever produces
absent or explicitly written units:

```
let duration = isoduration::parse("P1Y")?;
assert_eq!(duration.get_years(), Some(1));
assert_eq!(duration.get_months(), None);
# Ok::<(), isoduration::Error>(())
```

A leading `-` negates every unit that is present in the string:

```
let duration = isoduration::parse("-P1Y2M")?;
assert_eq!(duration.get_years(), Some(-1));
assert_eq!(duration.get_months(), Some(-2));
assert_eq!(duration.get_days(), None);
# Ok::<(), isoduration::Error>(())
```

Parse failures are reported as an [`Error`] with one of three
[`ErrorKind`]s; invalid characters carry their byte offset in the input.
Formatting can never fail. Fractional magnitudes are rejected, not rounded.

The codec is stateless and pure. Every operation takes immutable inputs,
performs no I/O and finishes in time proportional to the input length, so
calls may run concurrently without any coordination.

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for
  [`Error`]. Disabling it makes this crate `no_std` (it always uses
  `alloc`).
* **serde** - Implements `Serialize` and `Deserialize` for [`Duration`]
  using the omit-zero-or-absent string form.
* **logging** - Emits a `log` trace message when parsing fails.

[ISO 8601 durations]: https://en.wikipedia.org/wiki/ISO_8601#Durations
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

use alloc::string::String;

pub use crate::{
    duration::Duration,
    error::{Error, ErrorKind},
    unit::Unit,
};

#[macro_use]
mod logging;

mod duration;
mod error;
pub mod fmt;
mod unit;

/// Parses an ISO 8601 duration string into a [`Duration`].
///
/// The input may be anything that can be borrowed as bytes. Designators are
/// matched ASCII case insensitively, and a leading `-` negates every unit
/// present in the string. Parsing is all-or-nothing: the first problem
/// encountered aborts the parse.
///
/// This is equivalent to `input.parse::<Duration>()`, via the
/// `core::str::FromStr` implementation on [`Duration`].
///
/// # Errors
///
/// Returns an [`Error`] when the input lacks the `P` marker, contains a
/// fractional value, or contains a character that is neither numeric nor a
/// designator of the active segment.
///
/// # Example
///
/// ```
/// let duration = isoduration::parse("PT1H40M45S")?;
/// assert_eq!(duration.get_hours(), Some(1));
/// assert_eq!(duration.get_minutes(), Some(40));
/// assert_eq!(duration.get_seconds(), Some(45));
/// # Ok::<(), isoduration::Error>(())
/// ```
pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Duration, Error> {
    fmt::iso8601::DEFAULT_DURATION_PARSER.parse_duration(input)
}

/// Formats a [`Duration`] as an ISO 8601 duration string.
///
/// When `omit_zero_or_absent` is false, every unit is rendered in fixed
/// order with absent units written as `0`, and the `T` marker is always
/// present. When it is true, units that are zero or absent are skipped, the
/// `T` marker is written only when a time unit qualifies, and a duration
/// with nothing to render becomes the canonical `PT0S`.
///
/// Formatting never fails.
///
/// # Example
///
/// ```
/// use isoduration::Duration;
///
/// let duration = Duration::new().years(1).months(1).weeks(1).days(1);
/// assert_eq!(
///     isoduration::format(&duration, false),
///     "P1Y1M1W1DT0H0M0S",
/// );
/// assert_eq!(isoduration::format(&duration, true), "P1Y1M1W1D");
/// ```
pub fn format(duration: &Duration, omit_zero_or_absent: bool) -> String {
    if omit_zero_or_absent {
        fmt::iso8601::COMPACT_DURATION_PRINTER.duration_to_string(duration)
    } else {
        fmt::iso8601::DEFAULT_DURATION_PRINTER.duration_to_string(duration)
    }
}
