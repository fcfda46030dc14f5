use crate::booking::Booking;
use chrono::NaiveDate;
use prettytable::{Cell, Row, Table};

/// Column headers of the export table.
pub const EXPORT_HEADERS: [&str; 10] = [
    "ID",
    "Номер",
    "Гость",
    "Телефон",
    "Дата заезда",
    "Дата выезда",
    "Гостей",
    "Комментарий",
    "Статус",
    "Создано",
];

/// Selection criteria for an export: an inclusive creation-date range and an
/// optional room. All criteria are optional; an empty filter selects every
/// booking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportFilter {
    /// Keep bookings created on or after this date.
    pub date_from: Option<NaiveDate>,
    /// Keep bookings created on or before this date.
    pub date_to: Option<NaiveDate>,
    /// Keep only bookings for this room.
    pub room_id: Option<String>,
}

impl ExportFilter {
    fn matches(&self, booking: &Booking) -> bool {
        if let Some(from) = self.date_from {
            if booking.created_date() < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if booking.created_date() > to {
                return false;
            }
        }
        if let Some(ref room_id) = self.room_id {
            if &booking.room_id != room_id {
                return false;
            }
        }
        true
    }
}

/// Select the bookings matching the filter, newest first.
pub fn select<'a>(bookings: &'a [Booking], filter: &ExportFilter) -> Vec<&'a Booking> {
    let mut selection: Vec<&Booking> = bookings
        .iter()
        .filter(|booking| filter.matches(booking))
        .collect();
    selection.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    selection
}

/// Render a selection as a table under the export headers. Dates are written
/// in their ISO form and absent values as empty cells, matching the rows of
/// the downloadable report.
pub fn table(bookings: &[&Booking]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(
        EXPORT_HEADERS.iter().map(|header| Cell::new(header)).collect(),
    ));
    for booking in bookings {
        table.add_row(Row::new(vec![
            Cell::new(&booking.id.to_string()),
            Cell::new(&booking.room_name),
            Cell::new(&booking.guest_name),
            Cell::new(&booking.guest_phone),
            Cell::new(&booking.check_in_date.to_string()),
            Cell::new(
                &booking
                    .check_out_date
                    .map(|date| date.to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(&booking.guests_count.to_string()),
            Cell::new(&booking.comment),
            Cell::new(&booking.status),
            Cell::new(&booking.created_at.format("%Y-%m-%dT%H:%M:%S").to_string()),
        ]));
    }
    table
}
