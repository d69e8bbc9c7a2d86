// File: ./src/cli.rs
//! Shared command-line interface logic: help text and the one-shot `format`
//! command.
use crate::model::{Day, SelectionList, TimeRange};
use crate::notice::Notice;
use anyhow::{Result, anyhow};

pub fn print_help(binary_name: &str) {
    println!(
        "Nittei v{} - Pick candidate dates and copy them as a scheduling proposal (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!(
        "    {} format <date>[@HH:MM-HH:MM]... [--no-priority] [--no-time] [--json]",
        binary_name
    );
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and logs.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("FORMAT COMMAND:");
    println!("    Dates are listed in preference order. A time range is appended with '@'.");
    println!(
        "    {} format 2024-06-01 2024-06-03                 Ranked dates",
        binary_name
    );
    println!(
        "    {} format 2024-06-01@09:00-10:30 --no-priority  Date with time range",
        binary_name
    );
    println!(
        "    {} format 2024-06-01 --json                      Rows as JSON",
        binary_name
    );
    println!();
    println!("KEYBINDINGS:");
    println!("    Press '?' inside the app for full interactive help");
    println!();
    println!("CONFIG:");
    println!("    priority_enabled, time_enabled, locale, log_level,");
    println!("    calendar_file, calendar_access, default_start_time, default_end_time");
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatArgs {
    pub entries: Vec<(Day, Option<TimeRange>)>,
    pub priority: bool,
    pub time: bool,
    pub json: bool,
}

/// `2024-06-01` or `2024-06-01@09:00-10:30`
pub fn parse_entry(arg: &str) -> Result<(Day, Option<TimeRange>)> {
    let (day_str, range_str) = match arg.split_once('@') {
        Some((d, r)) => (d, Some(r)),
        None => (arg, None),
    };
    let day: Day = day_str
        .parse()
        .map_err(|e| anyhow!("Invalid date '{}': {}", day_str, e))?;
    let range = match range_str {
        Some(r) => {
            let (start, end) = r
                .split_once('-')
                .ok_or_else(|| anyhow!("Invalid time range '{}', expected HH:MM-HH:MM", r))?;
            Some(TimeRange::parse(start, end).map_err(|e| anyhow!("{}: {}", arg, e))?)
        }
        None => None,
    };
    Ok((day, range))
}

/// Parses everything after `format`.
pub fn parse_format_args(args: &[String]) -> Result<FormatArgs> {
    let mut out = FormatArgs {
        entries: Vec::new(),
        priority: true,
        time: true,
        json: false,
    };
    for arg in args {
        match arg.as_str() {
            "--no-priority" => out.priority = false,
            "--no-time" => out.time = false,
            "--json" => out.json = true,
            s if s.starts_with('-') => return Err(anyhow!("Unknown option '{}'", s)),
            s => out.entries.push(parse_entry(s)?),
        }
    }
    Ok(out)
}

/// Builds the list in argument order and renders it.
pub fn run_format(args: &FormatArgs) -> Result<String> {
    let mut list = SelectionList::new(args.priority, args.time);
    for (day, range) in &args.entries {
        let result = match range {
            Some(_) => list.add_date(*day, *range).map(|_| ()),
            None => {
                // An untimed date is what the screen produces when time mode is
                // switched off while picking it.
                list.set_time_enabled(false);
                let r = list.add_date(*day, None).map(|_| ());
                list.set_time_enabled(args.time);
                r
            }
        };
        result.map_err(|e| anyhow!("{} ({})", Notice::from(&e).line(), day))?;
    }

    if args.json {
        Ok(serde_json::to_string_pretty(list.rows())?)
    } else {
        Ok(list.export_text())
    }
}
