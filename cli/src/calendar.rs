// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write as _;

use colored::Colorize;
use jiff::{ToSpan, civil::Date};
use nextup_core::{CalendarWidget, DateMarker, MarkedDates, ValidationError};

const WEEKDAYS: &str = "Su Mo Tu We Th Fr Sa";
const INPUT_HINT: &str = "YYYY-MM-DD, today, < or > to change month, empty to close";

/// Month grid on the terminal, with days typed in.
#[derive(Debug, Clone)]
pub struct TerminalCalendar {
    title: String,
    today: Date,
}

impl TerminalCalendar {
    pub fn new(title: impl Into<String>, today: Date) -> Self {
        Self {
            title: title.into(),
            today,
        }
    }
}

impl CalendarWidget for TerminalCalendar {
    fn render(
        &mut self,
        marked: &MarkedDates,
        min_date: Option<Date>,
        on_day_selected: &mut dyn FnMut(Date) -> Result<(), ValidationError>,
    ) {
        let mut month = initial_month(marked, min_date, self.today);
        loop {
            let grid = render_month(month, marked, min_date, self.today);
            if !drawn(cliclack::note(&self.title, grid)) {
                return;
            }

            let raw: String = match cliclack::input(&self.title)
                .placeholder(INPUT_HINT)
                .required(false)
                .interact()
            {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::debug!(err = %e, "calendar input closed");
                    return;
                }
            };

            match parse_input(&raw, self.today) {
                Ok(CalendarInput::Close) => return,
                Ok(CalendarInput::PrevMonth) => month = shift_month(month, -1),
                Ok(CalendarInput::NextMonth) => month = shift_month(month, 1),
                Ok(CalendarInput::Day(day)) => match on_day_selected(day) {
                    Ok(()) => return,
                    Err(e) => {
                        if !drawn(cliclack::log::error(e.to_string())) {
                            return;
                        }
                    }
                },
                Err(msg) => {
                    if !drawn(cliclack::log::warning(msg)) {
                        return;
                    }
                }
            }
        }
    }
}

/// One line of user input to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarInput {
    Close,
    PrevMonth,
    NextMonth,
    Day(Date),
}

pub fn parse_input(raw: &str, today: Date) -> Result<CalendarInput, String> {
    match raw.trim() {
        "" => Ok(CalendarInput::Close),
        "<" | "p" | "prev" => Ok(CalendarInput::PrevMonth),
        ">" | "n" | "next" => Ok(CalendarInput::NextMonth),
        "today" => Ok(CalendarInput::Day(today)),
        "tomorrow" => today
            .tomorrow()
            .map(CalendarInput::Day)
            .map_err(|e| e.to_string()),
        s => s
            .parse::<Date>()
            .map(CalendarInput::Day)
            .map_err(|_| format!("Invalid date {s:?}, expected YYYY-MM-DD")),
    }
}

/// Logs a failed terminal write; the calendar closes when this is false.
fn drawn(res: std::io::Result<()>) -> bool {
    match res {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(err = %e, "failed to draw calendar");
            false
        }
    }
}

fn initial_month(marked: &MarkedDates, min_date: Option<Date>, today: Date) -> Date {
    min_date
        .or_else(|| marked.keys().next().copied())
        .unwrap_or(today)
        .first_of_month()
}

fn shift_month(month: Date, delta: i32) -> Date {
    month.checked_add(delta.months()).unwrap_or(month)
}

/// Weeks of the month containing `month`, Sunday first.
fn month_weeks(month: Date) -> Vec<[Option<Date>; 7]> {
    let first = month.first_of_month();
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = usize::try_from(first.weekday().to_sunday_zero_offset()).unwrap_or(0);

    let mut day = Some(first);
    while let Some(d) = day.filter(|d| d.month() == first.month()) {
        week[col] = Some(d);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
        day = d.tomorrow().ok();
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellStyle {
    Plain,
    Today,
    Disabled,
    Endpoint,
    InRange,
}

fn cell_style(day: Date, marked: &MarkedDates, min_date: Option<Date>, today: Date) -> CellStyle {
    match marked.get(&day).map(|m| m.marker) {
        Some(DateMarker::Start | DateMarker::End | DateMarker::Single) => CellStyle::Endpoint,
        Some(DateMarker::InRange) => CellStyle::InRange,
        None if min_date.is_some_and(|min| day < min) => CellStyle::Disabled,
        None if day == today => CellStyle::Today,
        None => CellStyle::Plain,
    }
}

fn render_month(month: Date, marked: &MarkedDates, min_date: Option<Date>, today: Date) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^20}", month.strftime("%B %Y").to_string().bold());
    let _ = write!(out, "{WEEKDAYS}");

    for week in month_weeks(month) {
        out.push('\n');
        let cells: Vec<String> = week
            .iter()
            .map(|day| match day {
                None => "  ".to_string(),
                Some(day) => {
                    let text = format!("{:>2}", day.day());
                    match cell_style(*day, marked, min_date, today) {
                        CellStyle::Plain => text,
                        CellStyle::Today => text.underline().to_string(),
                        CellStyle::Disabled => text.dimmed().to_string(),
                        CellStyle::Endpoint => text.bold().reversed().to_string(),
                        CellStyle::InRange => text.cyan().to_string(),
                    }
                }
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
    }
    out
}
