use crate::{
    duration::Duration,
    fmt::util::Decimal,
    unit::{self, Unit},
};

/// A printer for ISO 8601 durations.
#[derive(Clone, Debug)]
pub(super) struct DurationPrinter {
    omit_zero_or_absent: bool,
    lowercase: bool,
}

impl DurationPrinter {
    /// Create a new duration printer with the default configuration.
    ///
    /// The default renders every unit, including zero and absent ones.
    pub(super) const fn new() -> DurationPrinter {
        DurationPrinter { omit_zero_or_absent: false, lowercase: false }
    }

    pub(super) const fn omit_zero_or_absent(
        self,
        yes: bool,
    ) -> DurationPrinter {
        DurationPrinter { omit_zero_or_absent: yes, ..self }
    }

    pub(super) const fn lowercase(self, yes: bool) -> DurationPrinter {
        DurationPrinter { lowercase: yes, ..self }
    }

    /// Print the given duration to the writer given.
    ///
    /// This only returns an error when the given writer returns an error.
    /// Every duration, including one with no units at all, renders to a
    /// valid string.
    pub(super) fn print_duration<W: core::fmt::Write>(
        &self,
        duration: &Duration,
        mut wtr: W,
    ) -> core::fmt::Result {
        if self.omit_zero_or_absent && duration.is_zero_or_absent() {
            // The canonical zero duration.
            self.print_designator(b'P', &mut wtr)?;
            self.print_designator(b'T', &mut wtr)?;
            wtr.write_str("0")?;
            return self.print_designator(b'S', &mut wtr);
        }

        self.print_designator(b'P', &mut wtr)?;
        for &(designator, unit) in unit::DATE_UNITS {
            self.print_unit(duration, unit, designator, &mut wtr)?;
        }
        if !self.omit_zero_or_absent || !duration.time_is_zero_or_absent() {
            self.print_designator(b'T', &mut wtr)?;
            for &(designator, unit) in unit::TIME_UNITS {
                self.print_unit(duration, unit, designator, &mut wtr)?;
            }
        }
        Ok(())
    }

    /// Writes one `<value><designator>` token, or nothing at all when the
    /// active mode filters the unit out.
    fn print_unit<W: core::fmt::Write>(
        &self,
        duration: &Duration,
        unit: Unit,
        designator: u8,
        wtr: &mut W,
    ) -> core::fmt::Result {
        let value = match duration.get(unit) {
            None | Some(0) if self.omit_zero_or_absent => return Ok(()),
            None => 0,
            Some(value) => value,
        };
        wtr.write_str(Decimal::new(value).as_str())?;
        self.print_designator(designator, wtr)
    }

    fn print_designator<W: core::fmt::Write>(
        &self,
        byte: u8,
        wtr: &mut W,
    ) -> core::fmt::Result {
        wtr.write_char(char::from(if self.lowercase {
            byte.to_ascii_lowercase()
        } else {
            byte
        }))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    fn all_units(duration: &Duration) -> String {
        let mut buf = String::new();
        DurationPrinter::new().print_duration(duration, &mut buf).unwrap();
        buf
    }

    fn omit(duration: &Duration) -> String {
        let mut buf = String::new();
        DurationPrinter::new()
            .omit_zero_or_absent(true)
            .print_duration(duration, &mut buf)
            .unwrap();
        buf
    }

    #[test]
    fn print_all_units() {
        let duration = Duration::new()
            .years(6)
            .months(2)
            .weeks(2)
            .days(2)
            .hours(4)
            .minutes(44)
            .seconds(22);
        insta::assert_snapshot!(all_units(&duration), @"P6Y2M2W2DT4H44M22S");
    }

    #[test]
    fn print_all_units_renders_absent_as_zero() {
        insta::assert_snapshot!(
            all_units(&Duration::new()),
            @"P0Y0M0W0DT0H0M0S",
        );
        insta::assert_snapshot!(
            all_units(&Duration::new().years(1).minutes(30)),
            @"P1Y0M0W0DT0H30M0S",
        );
    }

    #[test]
    fn print_omit_skips_zero_and_absent() {
        let duration = Duration::new()
            .years(0)
            .months(1)
            .weeks(1)
            .days(1)
            .hours(1)
            .minutes(1)
            .seconds(1);
        insta::assert_snapshot!(omit(&duration), @"P1M1W1DT1H1M1S");

        let duration = Duration::new().months(1).days(2).seconds(3);
        insta::assert_snapshot!(omit(&duration), @"P1M2DT3S");
    }

    #[test]
    fn print_omit_suppresses_empty_time_segment() {
        let duration = Duration::new().years(1).months(1).weeks(1).days(1);
        insta::assert_snapshot!(omit(&duration), @"P1Y1M1W1D");

        let duration = duration.hours(0).minutes(0).seconds(0);
        insta::assert_snapshot!(omit(&duration), @"P1Y1M1W1D");
    }

    #[test]
    fn print_omit_canonical_zero() {
        insta::assert_snapshot!(omit(&Duration::new()), @"PT0S");
        insta::assert_snapshot!(
            omit(&Duration::new().years(0).seconds(0)),
            @"PT0S",
        );
    }

    #[test]
    fn print_negative_magnitudes() {
        let duration = Duration::new().years(-1).months(-2).seconds(-3);
        insta::assert_snapshot!(omit(&duration), @"P-1Y-2MT-3S");
        insta::assert_snapshot!(
            all_units(&duration),
            @"P-1Y-2M0W0DT0H0M-3S",
        );
    }

    #[test]
    fn print_lowercase() {
        let duration = Duration::new().years(1).minutes(30);
        let mut buf = String::new();
        DurationPrinter::new()
            .omit_zero_or_absent(true)
            .lowercase(true)
            .print_duration(&duration, &mut buf)
            .unwrap();
        insta::assert_snapshot!(buf, @"p1yt30m");

        let mut buf = String::new();
        DurationPrinter::new()
            .omit_zero_or_absent(true)
            .lowercase(true)
            .print_duration(&Duration::new(), &mut buf)
            .unwrap();
        insta::assert_snapshot!(buf, @"pt0s");
    }
}
