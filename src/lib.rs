//! Convert the printed SDUST timetable workbook (.xls/.xlsx) into an
//! iCalendar file.
//!
//! The `timetable` modules are pure and I/O-free: cell text decoding, grid
//! walking, course merging and location resolution. `workbook` loads the
//! spreadsheet into a plain grid, `ics` expands merged courses into dated
//! event occurrences and serializes them, and `cli`/`server` are the
//! command-line and calendar-sharing glue around the core.

pub mod cli;
pub mod ics;
pub mod server;
pub mod timetable;
pub mod workbook;
