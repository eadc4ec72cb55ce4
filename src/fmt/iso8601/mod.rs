/*!
A parser and printer for the [ISO 8601 duration] format.

The grammar handled here is the duration sub-grammar only, with designators
matched ASCII case insensitively and fractional values rejected:

```text
duration     = ["-"] "P" [date-segment] ["T" time-segment]
date-segment = *( integer date-designator )  ; one of Y, M, W, D
time-segment = *( integer time-designator )  ; one of H, M, S
integer      = ["-"] 1*DIGIT
```

Note that `M` maps to months before the `T` marker and to minutes after it.

[ISO 8601 duration]: https://en.wikipedia.org/wiki/ISO_8601#Durations
*/

use alloc::string::String;

use crate::{duration::Duration, error::Error};

mod parser;
mod printer;

pub(crate) static DEFAULT_DURATION_PARSER: DurationParser =
    DurationParser::new();
pub(crate) static DEFAULT_DURATION_PRINTER: DurationPrinter =
    DurationPrinter::new();
pub(crate) static COMPACT_DURATION_PRINTER: DurationPrinter =
    DurationPrinter::new().omit_zero_or_absent(true);

/// A parser for ISO 8601 duration strings.
///
/// This is the configurable equivalent of the crate-level
/// [`parse`](crate::parse) function and of `"..".parse::<Duration>()`.
/// There are currently no configuration options, so the only reason to
/// reach for this type directly is to parse from raw bytes.
///
/// # Example
///
/// ```
/// use isoduration::fmt::iso8601::DurationParser;
///
/// static PARSER: DurationParser = DurationParser::new();
///
/// let duration = PARSER.parse_duration(b"PT40M30S")?;
/// assert_eq!(duration.get_minutes(), Some(40));
/// assert_eq!(duration.get_seconds(), Some(30));
/// # Ok::<(), isoduration::Error>(())
/// ```
#[derive(Debug)]
pub struct DurationParser {
    p: parser::DurationParser,
}

impl DurationParser {
    /// Create a new parser with the default configuration.
    pub const fn new() -> DurationParser {
        DurationParser { p: parser::DurationParser::new() }
    }

    /// Parse an ISO 8601 duration string into a [`Duration`].
    ///
    /// Parsing is all-or-nothing: the first problem encountered aborts the
    /// parse and is returned as an [`Error`].
    pub fn parse_duration<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Duration, Error> {
        match self.p.parse_duration(input.as_ref()) {
            Ok(duration) => Ok(duration),
            Err(err) => {
                trace!("failed to parse ISO 8601 duration: {err}");
                Err(err)
            }
        }
    }
}

impl Default for DurationParser {
    fn default() -> DurationParser {
        DurationParser::new()
    }
}

/// A printer for ISO 8601 duration strings.
///
/// This is the configurable equivalent of the crate-level
/// [`format`](crate::format) function. The two rendering modes from that
/// function map to the [`DurationPrinter::omit_zero_or_absent`] option
/// here; in addition, designators can be written in lowercase.
///
/// Printing never fails, except when the underlying writer fails.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601::DurationPrinter, Duration};
///
/// static PRINTER: DurationPrinter =
///     DurationPrinter::new().omit_zero_or_absent(true);
///
/// let duration = Duration::new().years(1).hours(0).minutes(30);
/// assert_eq!(PRINTER.duration_to_string(&duration), "P1YT30M");
/// ```
#[derive(Clone, Debug)]
pub struct DurationPrinter {
    p: printer::DurationPrinter,
}

impl DurationPrinter {
    /// Create a new printer with the default configuration.
    ///
    /// The default mode renders every unit in fixed order, with absent
    /// units rendered as `0`, and always includes the `T` marker.
    pub const fn new() -> DurationPrinter {
        DurationPrinter { p: printer::DurationPrinter::new() }
    }

    /// When enabled, units whose value is zero or that were never assigned
    /// one are left out entirely, and the `T` marker is only written when
    /// at least one time unit qualifies.
    ///
    /// A duration where every unit is zero or absent renders as the
    /// canonical zero duration `PT0S` in this mode.
    pub const fn omit_zero_or_absent(self, yes: bool) -> DurationPrinter {
        DurationPrinter { p: self.p.omit_zero_or_absent(yes) }
    }

    /// When enabled, designators are written in lowercase.
    ///
    /// The parser accepts either case, so this does not affect round
    /// tripping.
    pub const fn lowercase(self, yes: bool) -> DurationPrinter {
        DurationPrinter { p: self.p.lowercase(yes) }
    }

    /// Format the given duration into a new `String`.
    pub fn duration_to_string(&self, duration: &Duration) -> String {
        let mut buf = String::with_capacity(4);
        self.print_duration(duration, &mut buf)
            .expect("writing to buffer never fails");
        buf
    }

    /// Print the given duration to the writer given.
    pub fn print_duration<W: core::fmt::Write>(
        &self,
        duration: &Duration,
        wtr: W,
    ) -> core::fmt::Result {
        self.p.print_duration(duration, wtr)
    }
}

impl Default for DurationPrinter {
    fn default() -> DurationPrinter {
        DurationPrinter::new()
    }
}
