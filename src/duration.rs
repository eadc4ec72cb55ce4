use crate::{
    fmt::iso8601::{
        COMPACT_DURATION_PRINTER, DEFAULT_DURATION_PARSER,
        DEFAULT_DURATION_PRINTER,
    },
    unit::Unit,
};

/// A duration expressed as a set of calendrical units.
///
/// A `Duration` maps each of the seven units `year`, `month`, `week`, `day`,
/// `hour`, `minute` and `second` to an *optional* signed integer magnitude.
/// A unit that was never assigned a magnitude is _absent_, which is distinct
/// from a unit explicitly assigned `0`. The distinction matters when
/// formatting: the omit-zero-or-absent mode treats both the same, while the
/// all-units mode renders absent units as `0`.
///
/// A `Duration` is a purely structural value. No calendar-aware
/// normalization ever happens: 60 minutes stays 60 minutes and never
/// becomes 1 hour.
///
/// # Construction
///
/// The builder methods assign one unit each and can be chained:
///
/// ```
/// use isoduration::Duration;
///
/// let duration = Duration::new().years(6).months(2).days(2);
/// assert_eq!(duration.get_years(), Some(6));
/// assert_eq!(duration.get_weeks(), None);
/// ```
///
/// # Parsing and formatting
///
/// `Duration` implements [`core::str::FromStr`] and
/// [`core::fmt::Display`]. The `Display` implementation renders the
/// omit-zero-or-absent form by default and the all-units form when the
/// alternate flag `{:#}` is used:
///
/// ```
/// use isoduration::Duration;
///
/// let duration: Duration = "P1YT30M".parse()?;
/// assert_eq!(format!("{duration}"), "P1YT30M");
/// assert_eq!(format!("{duration:#}"), "P1Y0M0W0DT0H30M0S");
/// # Ok::<(), isoduration::Error>(())
/// ```
///
/// # Arithmetic
///
/// Addition is component-wise and preserves absence: a unit absent from both
/// operands stays absent, while an absent unit on one side is treated as
/// `0`. Multiplication by a scalar scales every present unit and leaves
/// absent units absent. Both saturate on overflow of `i64`.
///
/// ```
/// use isoduration::Duration;
///
/// let date = Duration::new().years(1).months(2);
/// let time = Duration::new().hours(3);
/// assert_eq!(date + time, Duration::new().years(1).months(2).hours(3));
/// assert_eq!(-date, Duration::new().years(-1).months(-2));
/// ```
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct Duration {
    pub(crate) years: Option<i64>,
    pub(crate) months: Option<i64>,
    pub(crate) weeks: Option<i64>,
    pub(crate) days: Option<i64>,
    pub(crate) hours: Option<i64>,
    pub(crate) minutes: Option<i64>,
    pub(crate) seconds: Option<i64>,
}

impl Duration {
    /// Creates a new duration with every unit absent.
    pub const fn new() -> Duration {
        Duration {
            years: None,
            months: None,
            weeks: None,
            days: None,
            hours: None,
            minutes: None,
            seconds: None,
        }
    }

    /// Returns this duration with the year unit set to the given value.
    pub const fn years(self, n: i64) -> Duration {
        Duration { years: Some(n), ..self }
    }

    /// Returns this duration with the month unit set to the given value.
    pub const fn months(self, n: i64) -> Duration {
        Duration { months: Some(n), ..self }
    }

    /// Returns this duration with the week unit set to the given value.
    pub const fn weeks(self, n: i64) -> Duration {
        Duration { weeks: Some(n), ..self }
    }

    /// Returns this duration with the day unit set to the given value.
    pub const fn days(self, n: i64) -> Duration {
        Duration { days: Some(n), ..self }
    }

    /// Returns this duration with the hour unit set to the given value.
    pub const fn hours(self, n: i64) -> Duration {
        Duration { hours: Some(n), ..self }
    }

    /// Returns this duration with the minute unit set to the given value.
    pub const fn minutes(self, n: i64) -> Duration {
        Duration { minutes: Some(n), ..self }
    }

    /// Returns this duration with the second unit set to the given value.
    pub const fn seconds(self, n: i64) -> Duration {
        Duration { seconds: Some(n), ..self }
    }

    /// Returns the magnitude of the year unit, if one was assigned.
    pub const fn get_years(&self) -> Option<i64> {
        self.years
    }

    /// Returns the magnitude of the month unit, if one was assigned.
    pub const fn get_months(&self) -> Option<i64> {
        self.months
    }

    /// Returns the magnitude of the week unit, if one was assigned.
    pub const fn get_weeks(&self) -> Option<i64> {
        self.weeks
    }

    /// Returns the magnitude of the day unit, if one was assigned.
    pub const fn get_days(&self) -> Option<i64> {
        self.days
    }

    /// Returns the magnitude of the hour unit, if one was assigned.
    pub const fn get_hours(&self) -> Option<i64> {
        self.hours
    }

    /// Returns the magnitude of the minute unit, if one was assigned.
    pub const fn get_minutes(&self) -> Option<i64> {
        self.minutes
    }

    /// Returns the magnitude of the second unit, if one was assigned.
    pub const fn get_seconds(&self) -> Option<i64> {
        self.seconds
    }

    /// Returns the magnitude of the given unit, if one was assigned.
    pub const fn get(&self, unit: Unit) -> Option<i64> {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Week => self.weeks,
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
        }
    }

    /// Returns this duration with the given unit set to the given value.
    pub const fn with_unit(self, unit: Unit, n: i64) -> Duration {
        match unit {
            Unit::Year => self.years(n),
            Unit::Month => self.months(n),
            Unit::Week => self.weeks(n),
            Unit::Day => self.days(n),
            Unit::Hour => self.hours(n),
            Unit::Minute => self.minutes(n),
            Unit::Second => self.seconds(n),
        }
    }

    /// Returns true when every unit of this duration is either absent or
    /// explicitly zero.
    ///
    /// This is the condition under which the omit-zero-or-absent formatting
    /// mode falls back to the canonical zero duration `PT0S`.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// assert!(Duration::new().is_zero_or_absent());
    /// assert!(Duration::new().years(0).is_zero_or_absent());
    /// assert!(!Duration::new().years(1).is_zero_or_absent());
    /// ```
    pub fn is_zero_or_absent(&self) -> bool {
        let units = [
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ];
        units.iter().all(|unit| unit.unwrap_or(0) == 0)
    }

    /// Returns true when every time unit (hour, minute, second) of this
    /// duration is either absent or explicitly zero.
    ///
    /// The omit-zero-or-absent formatting mode suppresses the `T` marker
    /// and everything after it exactly when this is true.
    pub fn time_is_zero_or_absent(&self) -> bool {
        let units = [self.hours, self.minutes, self.seconds];
        units.iter().all(|unit| unit.unwrap_or(0) == 0)
    }
}

impl core::ops::Add for Duration {
    type Output = Duration;

    /// Adds two durations component-wise.
    ///
    /// A unit absent from both operands stays absent. Otherwise an absent
    /// unit is treated as zero. Sums saturate at the `i64` boundaries.
    fn add(self, rhs: Duration) -> Duration {
        fn unit(lhs: Option<i64>, rhs: Option<i64>) -> Option<i64> {
            match (lhs, rhs) {
                (None, None) => None,
                (lhs, rhs) => {
                    Some(lhs.unwrap_or(0).saturating_add(rhs.unwrap_or(0)))
                }
            }
        }
        Duration {
            years: unit(self.years, rhs.years),
            months: unit(self.months, rhs.months),
            weeks: unit(self.weeks, rhs.weeks),
            days: unit(self.days, rhs.days),
            hours: unit(self.hours, rhs.hours),
            minutes: unit(self.minutes, rhs.minutes),
            seconds: unit(self.seconds, rhs.seconds),
        }
    }
}

impl core::ops::Mul<i64> for Duration {
    type Output = Duration;

    /// Multiplies every present unit by the given scalar. Absent units stay
    /// absent and never acquire a sign. Products saturate at the `i64`
    /// boundaries.
    fn mul(self, rhs: i64) -> Duration {
        let unit = |n: Option<i64>| n.map(|n| n.saturating_mul(rhs));
        Duration {
            years: unit(self.years),
            months: unit(self.months),
            weeks: unit(self.weeks),
            days: unit(self.days),
            hours: unit(self.hours),
            minutes: unit(self.minutes),
            seconds: unit(self.seconds),
        }
    }
}

impl core::ops::Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        self * -1
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            DEFAULT_DURATION_PRINTER.print_duration(self, f)
        } else {
            COMPACT_DURATION_PRINTER.print_duration(self, f)
        }
    }
}

impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        static LABELS: &[(&str, fn(&Duration) -> Option<i64>)] = &[
            ("y", |d| d.years),
            ("mo", |d| d.months),
            ("w", |d| d.weeks),
            ("d", |d| d.days),
            ("h", |d| d.hours),
            ("m", |d| d.minutes),
            ("s", |d| d.seconds),
        ];

        f.write_str("Duration(")?;
        let mut wrote = false;
        for &(label, get) in LABELS {
            let Some(value) = get(self) else { continue };
            if wrote {
                f.write_str(" ")?;
            }
            write!(f, "{value}{label}")?;
            wrote = true;
        }
        f.write_str(")")
    }
}

impl core::str::FromStr for Duration {
    type Err = crate::Error;

    fn from_str(string: &str) -> Result<Duration, crate::Error> {
        DEFAULT_DURATION_PARSER.parse_duration(string)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        use serde::de;

        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 duration string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Duration, E> {
                DEFAULT_DURATION_PARSER
                    .parse_duration(value)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Duration, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_bytes(DurationVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        let (years, months, weeks, days, hours, minutes, seconds) =
            quickcheck::Arbitrary::arbitrary(g);
        Duration { years, months, weeks, days, hours, minutes, seconds }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Duration>> {
        alloc::boxed::Box::new(
            (
                self.years,
                self.months,
                self.weeks,
                self.days,
                self.hours,
                self.minutes,
                self.seconds,
            )
                .shrink()
                .map(
                    |(
                        years,
                        months,
                        weeks,
                        days,
                        hours,
                        minutes,
                        seconds,
                    )| {
                        Duration {
                            years,
                            months,
                            weeks,
                            days,
                            hours,
                            minutes,
                            seconds,
                        }
                    },
                ),
        )
    }
}
