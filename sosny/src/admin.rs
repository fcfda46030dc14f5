use crate::api::BookingApi;
use crate::booking::Booking;
use crate::BookingResult;
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use std::collections::HashSet;

/// Filter over the booking collection, by room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomFilter {
    /// Show every booking.
    All,
    /// Show only bookings for the room with this identifier.
    Room(String),
}

impl Default for RoomFilter {
    fn default() -> Self {
        RoomFilter::All
    }
}

impl RoomFilter {
    fn matches(&self, booking: &Booking) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Room(id) => &booking.room_id == id,
        }
    }
}

/// Summary counts over the full, unfiltered booking collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingStats {
    /// Count of all bookings.
    pub total: usize,
    /// Count of bookings created on the current calendar date.
    pub today: usize,
    /// Count of distinct rooms which have received at least one booking.
    pub rooms: usize,
}

/// Admin view over the bookings: the collection as last fetched from the
/// remote API, a room filter and summary counts. The filter and the counts are
/// derived purely from the in-memory collection; only a refresh touches the
/// network.
#[derive(Debug, Default)]
pub struct BookingDashboard {
    bookings: Vec<Booking>,
    loading: bool,
    filter: RoomFilter,
}

impl BookingDashboard {
    /// Create an empty dashboard showing all rooms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the collection from the remote API. On success the previous
    /// collection is replaced by the returned one; on failure it is left
    /// untouched, so the view keeps showing the last good data next to the
    /// error. Overlapping refreshes are not deduplicated; whichever response
    /// settles last wins.
    pub async fn refresh<A: BookingApi + ?Sized>(&mut self, api: &A) -> BookingResult<()> {
        self.loading = true;
        let result = api.list_bookings().await;
        self.loading = false;

        match result {
            Ok(bookings) => {
                debug!("loaded {} bookings", bookings.len());
                self.bookings = bookings;
                Ok(())
            }
            Err(e) => {
                warn!("could not load bookings: {}", e);
                Err(e.into())
            }
        }
    }

    /// Replace the active room filter.
    pub fn set_filter(&mut self, filter: RoomFilter) {
        self.filter = filter;
    }

    /// The active room filter.
    pub fn filter(&self) -> &RoomFilter {
        &self.filter
    }

    /// The full collection as last fetched, in the order the API returned it.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Whether a list request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The bookings visible under the active filter, keeping the collection
    /// order.
    pub fn filtered(&self) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| self.filter.matches(booking))
            .collect()
    }

    /// Summary counts over the unfiltered collection. The "today" count is
    /// evaluated against the current local calendar date.
    pub fn stats(&self) -> BookingStats {
        self.stats_on(Local::now().date_naive())
    }

    fn stats_on(&self, today: NaiveDate) -> BookingStats {
        let rooms = self
            .bookings
            .iter()
            .map(|booking| booking.room_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        BookingStats {
            total: self.bookings.len(),
            today: self
                .bookings
                .iter()
                .filter(|booking| booking.created_date() == today)
                .count(),
            rooms,
        }
    }
}
