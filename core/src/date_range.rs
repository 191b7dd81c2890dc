// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt::Display;

use jiff::civil::Date;

use crate::ValidationError;

/// The start and end days of a project.
///
/// When both are set through a [`DateRangePicker`], `start <= end` holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateSelection {
    pub(crate) start: Option<Date>,
    pub(crate) end: Option<Date>,
}

impl DateSelection {
    /// Creates a selection from raw values, without enforcing any ordering.
    pub fn new(start: Option<Date>, end: Option<Date>) -> Self {
        Self { start, end }
    }

    /// The start date, if selected.
    pub fn start(&self) -> Option<Date> {
        self.start
    }

    /// The end date, if selected.
    pub fn end(&self) -> Option<Date> {
        self.end
    }

    /// Whether the selection satisfies `start <= end` (or has a side unset).
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}

/// Which side of the range a selection applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRole {
    /// The first day of the range.
    Start,
    /// The last day of the range.
    End,
}

impl Display for DateRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRole::Start => write!(f, "start"),
            DateRole::End => write!(f, "end"),
        }
    }
}

/// How a single day is highlighted in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMark {
    /// Whether the day itself was picked.
    pub selected: bool,
    /// Role-specific marker.
    pub marker: DateMarker,
}

/// Role-specific marker of a highlighted day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMarker {
    /// First day of the range.
    Start,
    /// Last day of the range.
    End,
    /// Start and end fall on the same day.
    Single,
    /// A day strictly between start and end.
    InRange,
}

/// Highlighted days, keyed by date.
pub type MarkedDates = BTreeMap<Date, DateMark>;

/// Calendar rendering capability consumed by the picker.
///
/// Implementations draw the month grid and report taps through
/// `on_day_selected`, which returns the validation outcome so the widget can
/// notify the user and let them pick again.
pub trait CalendarWidget {
    /// Shows the calendar until the user has picked a day or closed it.
    fn render(
        &mut self,
        marked: &MarkedDates,
        min_date: Option<Date>,
        on_day_selected: &mut dyn FnMut(Date) -> Result<(), ValidationError>,
    );
}

/// Editor over a [`DateSelection`] owned by someone else.
///
/// Every selection is written through immediately; dropping the picker does
/// not roll anything back.
#[derive(Debug)]
pub struct DateRangePicker<'a> {
    selection: &'a mut DateSelection,
}

impl<'a> DateRangePicker<'a> {
    /// Opens a picker over the given selection.
    pub fn new(selection: &'a mut DateSelection) -> Self {
        Self { selection }
    }

    /// The start date, if selected.
    pub fn start(&self) -> Option<Date> {
        self.selection.start
    }

    /// The end date, if selected.
    pub fn end(&self) -> Option<Date> {
        self.selection.end
    }

    /// Selects a day for the given role.
    ///
    /// A start date later than the current end date clears the end date. An
    /// end date earlier than the current start date is rejected and nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EndBeforeStart`] when an end date precedes the start date.
    pub fn select_date(&mut self, date: Date, role: DateRole) -> Result<(), ValidationError> {
        match role {
            DateRole::Start => {
                if self.selection.end.is_some_and(|end| end < date) {
                    tracing::debug!(%date, "start moved past end, clearing end date");
                    self.selection.end = None;
                }
                self.selection.start = Some(date);
                Ok(())
            }
            DateRole::End => {
                if self.selection.start.is_some_and(|start| date < start) {
                    tracing::debug!(%date, "rejecting end date before start");
                    return Err(ValidationError::EndBeforeStart);
                }
                self.selection.end = Some(date);
                Ok(())
            }
        }
    }

    /// The earliest day the calendar should offer for the given role.
    pub fn min_date(&self, role: DateRole) -> Option<Date> {
        match role {
            DateRole::Start => None,
            DateRole::End => self.selection.start,
        }
    }

    /// Highlighted days computed from the current selection.
    pub fn marked_dates(&self) -> MarkedDates {
        mark_range(self.selection.start, self.selection.end)
    }

    /// Shows the widget for one role, committing whatever the user picks.
    pub fn open<W: CalendarWidget + ?Sized>(&mut self, widget: &mut W, role: DateRole) {
        let marked = self.marked_dates();
        let min_date = self.min_date(role);
        widget.render(&marked, min_date, &mut |date: Date| {
            self.select_date(date, role)
        });
    }
}

fn mark_range(start: Option<Date>, end: Option<Date>) -> MarkedDates {
    const fn mark(marker: DateMarker) -> DateMark {
        DateMark {
            selected: true,
            marker,
        }
    }

    let mut marked = MarkedDates::new();
    match (start, end) {
        (Some(start), Some(end)) if start == end => {
            marked.insert(start, mark(DateMarker::Single));
        }
        (Some(start), Some(end)) => {
            if start < end {
                let mut day = start.tomorrow().ok();
                while let Some(d) = day.filter(|d| *d < end) {
                    let in_range = DateMark {
                        selected: false,
                        marker: DateMarker::InRange,
                    };
                    marked.insert(d, in_range);
                    day = d.tomorrow().ok();
                }
            }
            marked.insert(start, mark(DateMarker::Start));
            marked.insert(end, mark(DateMarker::End));
        }
        (Some(start), None) => {
            marked.insert(start, mark(DateMarker::Start));
        }
        (None, Some(end)) => {
            marked.insert(end, mark(DateMarker::End));
        }
        (None, None) => {}
    }
    marked
}
