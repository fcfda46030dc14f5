use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Status tag the remote API assigns to every newly created booking.
pub const STATUS_CONFIRMED: &str = "confirmed";

/// A guest's reservation record for a room and date range. Bookings are owned
/// by the remote API; the client only ever holds a read-only copy fetched from
/// the list endpoint or echoed back after creation. There is no update or
/// delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Identifier assigned by the remote API. Unique, immutable once assigned.
    pub id: i64,
    /// Identifier of the booked room, one of the catalog identifiers.
    pub room_id: String,
    /// Display label of the booked room, stored denormalized next to the id.
    pub room_name: String,
    /// Name of the guest who placed the booking.
    pub guest_name: String,
    /// Contact phone of the guest. Only non-emptiness was enforced on intake.
    pub guest_phone: String,
    /// First day of the stay.
    pub check_in_date: NaiveDate,
    /// Last day of the stay, when the guest picked one.
    #[serde(default)]
    pub check_out_date: Option<NaiveDate>,
    /// Size of the party.
    pub guests_count: u32,
    /// Free-form wishes from the guest, possibly empty.
    #[serde(default)]
    pub comment: String,
    /// Status tag assigned by the remote API.
    pub status: String,
    /// Creation timestamp assigned by the remote API.
    pub created_at: NaiveDateTime,
}

impl Booking {
    /// Display label for the status tag. The `confirmed` tag gets its
    /// translated label, any other tag is shown verbatim.
    pub fn status_label(&self) -> &str {
        if self.status == STATUS_CONFIRMED {
            "Подтверждено"
        } else {
            &self.status
        }
    }

    /// The calendar date on which this booking was created.
    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date()
    }
}

/// Payload of a create-booking request. `id`, `created_at` and `status` are
/// assigned by the remote API and are never part of the payload. Dates are
/// encoded as plain calendar dates, without a time component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Identifier of the room to book.
    pub room_id: String,
    /// Display label of the room, denormalized into the booking.
    pub room_name: String,
    /// Name of the guest, required.
    pub guest_name: String,
    /// Contact phone of the guest, required.
    pub guest_phone: String,
    /// First day of the stay, required.
    pub check_in_date: NaiveDate,
    /// Last day of the stay; left out of the payload entirely when not chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    /// Size of the party.
    pub guests_count: u32,
    /// Free-form wishes from the guest, possibly empty.
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::{Booking, BookingRequest};
    use chrono::NaiveDate;

    fn booking() -> Booking {
        Booking {
            id: 7,
            room_id: "2".to_string(),
            room_name: "Стандарт \"Сосна\"".to_string(),
            guest_name: "Иван Иванов".to_string(),
            guest_phone: "+7 (999) 123-45-67".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            check_out_date: None,
            guests_count: 2,
            comment: String::new(),
            status: "confirmed".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 11, 20)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn status_labels() {
        let mut b = booking();
        assert_eq!(b.status_label(), "Подтверждено");
        b.status = "cancelled".to_string();
        assert_eq!(b.status_label(), "cancelled");
    }

    #[test]
    fn created_date_truncates_time() {
        assert_eq!(
            booking().created_date(),
            NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()
        );
    }

    #[test]
    fn request_encodes_dates_without_time() {
        let request = BookingRequest {
            room_id: "2".to_string(),
            room_name: "Стандарт \"Сосна\"".to_string(),
            guest_name: "Иван".to_string(),
            guest_phone: "+79991234567".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            check_out_date: Some(NaiveDate::from_ymd_opt(2024, 12, 5).unwrap()),
            guests_count: 1,
            comment: "Особые пожелания".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["check_in_date"], "2024-12-01");
        assert_eq!(value["check_out_date"], "2024-12-05");
    }

    #[test]
    fn request_omits_absent_check_out() {
        let request = BookingRequest {
            room_id: "1".to_string(),
            room_name: "Люкс \"Кедр\"".to_string(),
            guest_name: "Иван".to_string(),
            guest_phone: "+79991234567".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            check_out_date: None,
            guests_count: 1,
            comment: String::new(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("check_out_date").is_none());
    }

    #[test]
    fn booking_decodes_api_timestamps() {
        let input = r#"{
            "id": 42,
            "room_id": "1",
            "room_name": "Люкс \"Кедр\"",
            "guest_name": "Елена",
            "guest_phone": "+79990000000",
            "check_in_date": "2024-12-01",
            "guests_count": 2,
            "status": "confirmed",
            "created_at": "2024-11-20T09:30:00.123456"
        }"#;

        let booking: Booking = serde_json::from_str(input).unwrap();
        assert_eq!(booking.id, 42);
        assert_eq!(booking.check_out_date, None);
        assert_eq!(booking.comment, "");
        assert_eq!(
            booking.created_date(),
            NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()
        );
    }
}
