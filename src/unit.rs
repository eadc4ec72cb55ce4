/// A single calendrical unit of an ISO 8601 duration.
///
/// Units are ordered from biggest (`Unit::Year`) to smallest
/// (`Unit::Second`), which is also the order in which they appear in the
/// textual format.
///
/// # Example
///
/// ```
/// use isoduration::{Duration, Unit};
///
/// let duration = Duration::new().years(2).seconds(30);
/// assert_eq!(duration.get(Unit::Year), Some(2));
/// assert_eq!(duration.get(Unit::Second), Some(30));
/// assert_eq!(duration.get(Unit::Hour), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Unit {
    /// The year unit, designated by `Y`.
    Year,
    /// The month unit, designated by `M` in the date segment.
    Month,
    /// The week unit, designated by `W`.
    Week,
    /// The day unit, designated by `D`.
    Day,
    /// The hour unit, designated by `H`.
    Hour,
    /// The minute unit, designated by `M` in the time segment.
    Minute,
    /// The second unit, designated by `S`.
    Second,
}

/// The designator table for the date segment of a duration, i.e., everything
/// before the `T` marker.
///
/// The order of entries is the fixed order in which units are rendered.
pub(crate) const DATE_UNITS: &[(u8, Unit)] = &[
    (b'Y', Unit::Year),
    (b'M', Unit::Month),
    (b'W', Unit::Week),
    (b'D', Unit::Day),
];

/// The designator table for the time segment of a duration, i.e., everything
/// after the `T` marker.
///
/// Note that `M` appears in both tables. Whether it means "month" or
/// "minute" is decided entirely by which segment it occurs in.
pub(crate) const TIME_UNITS: &[(u8, Unit)] = &[
    (b'H', Unit::Hour),
    (b'M', Unit::Minute),
    (b'S', Unit::Second),
];

/// Looks up the unit corresponding to a designator byte in the given segment
/// table. Matching is ASCII case insensitive.
pub(crate) fn designator_unit(
    table: &[(u8, Unit)],
    byte: u8,
) -> Option<Unit> {
    table
        .iter()
        .find(|&&(designator, _)| designator == byte.to_ascii_uppercase())
        .map(|&(_, unit)| unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designator_lookup_is_case_insensitive() {
        assert_eq!(designator_unit(DATE_UNITS, b'y'), Some(Unit::Year));
        assert_eq!(designator_unit(DATE_UNITS, b'Y'), Some(Unit::Year));
        assert_eq!(designator_unit(TIME_UNITS, b's'), Some(Unit::Second));
    }

    #[test]
    fn designator_lookup_is_segmented() {
        assert_eq!(designator_unit(DATE_UNITS, b'M'), Some(Unit::Month));
        assert_eq!(designator_unit(TIME_UNITS, b'M'), Some(Unit::Minute));
        assert_eq!(designator_unit(DATE_UNITS, b'H'), None);
        assert_eq!(designator_unit(TIME_UNITS, b'D'), None);
    }
}
