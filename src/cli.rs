//! Command-line dispatch: parse raw args, run one subcommand, return the
//! process exit code. 0 = success, 1 = runtime failure, 2 = usage error.

use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use crate::ics::{self, writer, TermTimes};
use crate::server;
use crate::timetable::grid::collect_records;
use crate::timetable::merge::merge_courses;
use crate::timetable::summary::render_summary;
use crate::timetable::Course;
use crate::workbook;

const DEFAULT_OUTPUT: &str = "课表.ics";
const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Parse,
    Summary,
    Serve,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("generate") => Some(Command::Generate),
        Some("parse") => Some(Command::Parse),
        Some("summary") => Some(Command::Summary),
        Some("serve") => Some(Command::Serve),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Generate) => handle_generate(args),
        Some(Command::Parse) => handle_parse(args),
        Some(Command::Summary) => handle_summary(args),
        Some(Command::Serve) => handle_serve(args),
        None => {
            eprintln!("usage: sdust-ical <generate|parse|summary|serve>");
            2
        }
    }
}

fn handle_generate(args: &[String]) -> i32 {
    let mut start_arg: Option<String> = None;
    let mut xls_arg: Option<PathBuf> = None;
    let mut out_path = PathBuf::from(DEFAULT_OUTPUT);
    let mut times = TermTimes::default();

    let mut iter = args.iter().skip(2);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" => match iter.next() {
                Some(value) => out_path = PathBuf::from(value),
                None => return usage_generate(),
            },
            "--times" => match iter.next() {
                Some(value) => match TermTimes::load(value) {
                    Ok(loaded) => times = loaded,
                    Err(err) => {
                        eprintln!("failed to load {value}: {err}");
                        return 1;
                    }
                },
                None => return usage_generate(),
            },
            _ if start_arg.is_none() => start_arg = Some(arg.clone()),
            _ if xls_arg.is_none() => xls_arg = Some(PathBuf::from(arg)),
            _ => return usage_generate(),
        }
    }

    let start_date = match start_arg.as_deref().map(parse_start_date) {
        Some(Ok(date)) => date,
        Some(Err(err)) => {
            eprintln!("invalid start date: {err}");
            return 2;
        }
        None => return usage_generate(),
    };

    let courses = match load_courses(xls_arg) {
        Ok(courses) => courses,
        Err(code) => return code,
    };

    let occurrences = ics::expand_occurrences(&courses, start_date, &times);
    let calendar = writer::write_calendar(&occurrences);
    if let Err(err) = fs::write(&out_path, calendar) {
        eprintln!("failed to write {}: {err}", out_path.display());
        return 1;
    }

    print!("{}", render_summary(&courses));
    println!(
        "wrote {} events to {}",
        occurrences.len(),
        out_path.display()
    );
    0
}

fn usage_generate() -> i32 {
    eprintln!("usage: sdust-ical generate <start-date> [xls-path] [--out FILE] [--times FILE]");
    2
}

fn handle_parse(args: &[String]) -> i32 {
    let as_csv = args.iter().any(|arg| arg == "--csv");
    let xls_arg = args[2..]
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .map(PathBuf::from);
    let courses = match load_courses(xls_arg) {
        Ok(courses) => courses,
        Err(code) => return code,
    };

    if as_csv {
        match courses_to_csv(&courses) {
            Ok(payload) => {
                print!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize courses: {err}");
                1
            }
        }
    } else {
        match serde_json::to_string_pretty(&courses) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize courses: {err}");
                1
            }
        }
    }
}

fn handle_summary(args: &[String]) -> i32 {
    let xls_arg = args.get(2).map(PathBuf::from);
    match load_courses(xls_arg) {
        Ok(courses) => {
            print!("{}", render_summary(&courses));
            0
        }
        Err(code) => code,
    }
}

fn handle_serve(args: &[String]) -> i32 {
    let ics_path = match args.get(2) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: sdust-ical serve <ics-path> [bind-addr]");
            return 2;
        }
    };
    if !ics_path.is_file() {
        eprintln!("{} does not exist; run generate first", ics_path.display());
        return 1;
    }
    let bind_addr = args
        .get(3)
        .cloned()
        .or_else(|| env::var("SDUST_ICAL_BIND").ok())
        .unwrap_or_else(|| DEFAULT_BIND.to_string());
    match server::run_server(&bind_addr, &ics_path) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

/// Accept 2025-09-01, 2025/9/1 and 2025.9.1; the term must start 2020-2030.
fn parse_start_date(input: &str) -> Result<NaiveDate, String> {
    let normalized: String = input
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '.' { '-' } else { c })
        .collect();
    let date =
        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").map_err(|err| err.to_string())?;
    if !(2020..=2030).contains(&date.year()) {
        return Err(format!("year {} is outside 2020-2030", date.year()));
    }
    Ok(date)
}

/// Resolve the workbook (explicit path or directory scan), load the grid and
/// run the full decode/merge pipeline. An empty result is reported as a
/// runtime failure, not a panic: a valid but empty sheet is a real outcome.
fn load_courses(xls_arg: Option<PathBuf>) -> Result<Vec<Course>, i32> {
    let path = match xls_arg.or_else(|| workbook::find_workbook(".")) {
        Some(path) => path,
        None => {
            eprintln!("no .xls/.xlsx workbook found; pass a path explicitly");
            return Err(1);
        }
    };
    let grid = match workbook::load_grid(&path) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("failed to read {}: {err}", path.display());
            return Err(1);
        }
    };
    let courses = merge_courses(collect_records(&grid));
    if courses.is_empty() {
        eprintln!("no courses found in {}", path.display());
        return Err(1);
    }
    Ok(courses)
}

/// Flat per-entry rows for spreadsheet-side inspection.
fn courses_to_csv(courses: &[Course]) -> Result<String, Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "name",
        "teacher",
        "classroom",
        "location",
        "weekday",
        "weeks",
        "periods",
    ])?;
    for course in courses {
        for entry in &course.schedules {
            let weekday = entry.weekday.to_string();
            let weeks = entry
                .weeks
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            let periods = format!("{}-{}", entry.indexes[0], entry.indexes[1]);
            writer.write_record([
                course.name.as_str(),
                course.teacher.as_str(),
                course.classroom.as_str(),
                course.location.as_str(),
                weekday.as_str(),
                weeks.as_str(),
                periods.as_str(),
            ])?;
        }
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}
