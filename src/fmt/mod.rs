/*!
Configurable support for printing and parsing ISO 8601 durations.

The [`iso8601`] module exposes the parser and printer types behind the
crate-level [`parse`](crate::parse) and [`format`](crate::format)
conveniences. Use them directly when the formatting mode needs to be chosen
once and reused, or when printing into an existing buffer.
*/

pub mod iso8601;
pub(crate) mod util;
