use crate::api::BookingApi;
use crate::booking::{Booking, BookingRequest};
use crate::catalog::Room;
use crate::BookingResult;
use chrono::{Local, NaiveDate};
use log::{info, warn};
use std::fmt;

/// Message shown when a submission is attempted with missing required fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Заполните все обязательные поля";

/// Message shown once a submission has been accepted.
pub const SUBMITTED_MESSAGE: &str =
    "Ваше бронирование принято. Мы свяжемся с вами в ближайшее время.";

/// The room selection carried by the form: the identifier plus its display
/// name, both denormalized into the booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomChoice {
    id: String,
    name: String,
}

impl RoomChoice {
    /// Identifier of the chosen room.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the chosen room.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// State of the booking form. Submission validates the required fields
/// locally first; only a form which passes validation produces a request to
/// the remote API. A submission in flight holds the exclusive borrow of the
/// form, so a second submission cannot start until the first one settles;
/// [`BookingForm::is_submitting`] mirrors the in-flight state so the
/// presentation layer can disable the submit action.
#[derive(Debug, Clone)]
pub struct BookingForm {
    selected_room: Option<RoomChoice>,
    check_in_date: Option<NaiveDate>,
    check_out_date: Option<NaiveDate>,
    guest_name: String,
    guest_phone: String,
    guests_count: u32,
    comment: String,
    submitting: bool,
    dialog_open: bool,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingForm {
    /// Create an empty form. The check-in date starts at the current local
    /// date and the party size starts at 1.
    pub fn new() -> Self {
        BookingForm {
            selected_room: None,
            check_in_date: Some(Local::now().date_naive()),
            check_out_date: None,
            guest_name: String::new(),
            guest_phone: String::new(),
            guests_count: 1,
            comment: String::new(),
            submitting: false,
            dialog_open: false,
        }
    }

    /// Select the room to book and open the submission dialog.
    pub fn select_room(&mut self, room: &Room) {
        self.selected_room = Some(RoomChoice {
            id: room.id.to_string(),
            name: room.name.to_string(),
        });
        self.dialog_open = true;
    }

    /// Close the submission dialog without touching the entered fields.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// The currently selected room, if any.
    pub fn selected_room(&self) -> Option<&RoomChoice> {
        self.selected_room.as_ref()
    }

    /// Set the check-in date. Unsetting it makes the form fail validation.
    pub fn set_check_in_date(&mut self, date: Option<NaiveDate>) {
        self.check_in_date = date;
    }

    /// The chosen check-in date.
    pub fn check_in_date(&self) -> Option<NaiveDate> {
        self.check_in_date
    }

    /// Set the optional check-out date.
    pub fn set_check_out_date(&mut self, date: Option<NaiveDate>) {
        self.check_out_date = date;
    }

    /// The chosen check-out date, if any.
    pub fn check_out_date(&self) -> Option<NaiveDate> {
        self.check_out_date
    }

    /// Set the guest name.
    pub fn set_guest_name(&mut self, name: impl Into<String>) {
        self.guest_name = name.into();
    }

    /// The entered guest name.
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Set the guest phone.
    pub fn set_guest_phone(&mut self, phone: impl Into<String>) {
        self.guest_phone = phone.into();
    }

    /// The entered guest phone.
    pub fn guest_phone(&self) -> &str {
        &self.guest_phone
    }

    /// Set the party size.
    pub fn set_guests_count(&mut self, count: u32) {
        self.guests_count = count;
    }

    /// The entered party size.
    pub fn guests_count(&self) -> u32 {
        self.guests_count
    }

    /// Set the free-form comment.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// The entered comment.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submission dialog is open.
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Validate the required fields and build the request payload from the
    /// current state.
    fn validated_request(&self) -> Result<BookingRequest, ValidationError> {
        let room = match self.selected_room {
            Some(ref room) => room,
            None => return Err(ValidationError::missing_fields()),
        };
        if self.guest_name.is_empty() || self.guest_phone.is_empty() {
            return Err(ValidationError::missing_fields());
        }
        let check_in_date = match self.check_in_date {
            Some(date) => date,
            None => return Err(ValidationError::missing_fields()),
        };
        Ok(BookingRequest {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            guest_name: self.guest_name.clone(),
            guest_phone: self.guest_phone.clone(),
            check_in_date,
            check_out_date: self.check_out_date,
            guests_count: self.guests_count,
            comment: self.comment.clone(),
        })
    }

    /// Submit the booking. When a required field is missing, a validation
    /// error is returned and no request is made. Otherwise exactly one
    /// create-booking request is issued. On success the guest name, phone and
    /// comment are cleared, the party size resets to 1 and the dialog closes;
    /// the date fields keep their values. On failure all entered values are
    /// preserved so the user can retry. There is no automatic retry.
    pub async fn submit<A: BookingApi + ?Sized>(&mut self, api: &A) -> BookingResult<Booking> {
        let request = self.validated_request()?;

        self.submitting = true;
        let result = api.create_booking(&request).await;
        self.submitting = false;

        match result {
            Ok(booking) => {
                info!(
                    "booking {} accepted for room {}",
                    booking.id, booking.room_id
                );
                self.guest_name.clear();
                self.guest_phone.clear();
                self.comment.clear();
                self.guests_count = 1;
                self.dialog_open = false;
                Ok(booking)
            }
            Err(e) => {
                warn!("booking submission failed: {}", e);
                Err(e.into())
            }
        }
    }
}

/// A local validation failure, detected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    msg: String,
}

impl ValidationError {
    fn missing_fields() -> Self {
        REQUIRED_FIELDS_MESSAGE.to_string().into()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

// default impls are fine here
impl std::error::Error for ValidationError {}

impl From<String> for ValidationError {
    fn from(s: String) -> Self {
        ValidationError { msg: s }
    }
}

#[cfg(test)]
mod tests {
    use super::BookingForm;
    use crate::api::{ApiError, ApiOperation, ApiResult, BookingApi};
    use crate::booking::{Booking, BookingRequest, STATUS_CONFIRMED};
    use crate::catalog;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// In-memory stand-in for the remote API, recording every request it
    /// receives and answering with a pre-configured result.
    struct FakeApi {
        requests: Mutex<Vec<BookingRequest>>,
        next: Mutex<Option<ApiResult<Booking>>>,
    }

    impl FakeApi {
        fn answering(result: ApiResult<Booking>) -> Self {
            FakeApi {
                requests: Mutex::new(Vec::new()),
                next: Mutex::new(Some(result)),
            }
        }

        fn unused() -> Self {
            FakeApi {
                requests: Mutex::new(Vec::new()),
                next: Mutex::new(None),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> BookingRequest {
            self.requests.lock().unwrap().last().unwrap().clone()
        }
    }

    #[async_trait]
    impl BookingApi for FakeApi {
        async fn create_booking(&self, request: &BookingRequest) -> ApiResult<Booking> {
            self.requests.lock().unwrap().push(request.clone());
            self.next
                .lock()
                .unwrap()
                .take()
                .expect("no response configured")
        }

        async fn list_bookings(&self) -> ApiResult<Vec<Booking>> {
            unreachable!("the form never lists bookings")
        }

        async fn bookings_for_room(&self, _room_id: &str) -> ApiResult<Vec<Booking>> {
            unreachable!("the form never lists bookings")
        }
    }

    fn persisted(id: i64, request: &BookingRequest) -> Booking {
        Booking {
            id,
            room_id: request.room_id.clone(),
            room_name: request.room_name.clone(),
            guest_name: request.guest_name.clone(),
            guest_phone: request.guest_phone.clone(),
            check_in_date: request.check_in_date,
            check_out_date: request.check_out_date,
            guests_count: request.guests_count,
            comment: request.comment.clone(),
            status: STATUS_CONFIRMED.to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 12, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new();
        form.select_room(&catalog::ROOMS[1]);
        form.set_guest_name("Иван");
        form.set_guest_phone("+7 (999) 123-45-67");
        form.set_check_in_date(NaiveDate::from_ymd_opt(2024, 12, 1));
        form
    }

    #[tokio::test]
    async fn missing_fields_never_reach_the_api() {
        let api = FakeApi::unused();

        // No room selected.
        let mut form = BookingForm::new();
        form.set_guest_name("Иван");
        form.set_guest_phone("+79991234567");
        let err = form.submit(&api).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Заполните все обязательные поля");

        // No guest name.
        let mut form = filled_form();
        form.set_guest_name("");
        assert!(form.submit(&api).await.unwrap_err().is_validation());

        // No phone.
        let mut form = filled_form();
        form.set_guest_phone("");
        assert!(form.submit(&api).await.unwrap_err().is_validation());

        // No check-in date.
        let mut form = filled_form();
        form.set_check_in_date(None);
        assert!(form.submit(&api).await.unwrap_err().is_validation());

        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn a_valid_form_issues_exactly_one_request() {
        let mut form = filled_form();
        form.set_check_out_date(NaiveDate::from_ymd_opt(2024, 12, 5));
        form.set_guests_count(3);
        form.set_comment("Особые пожелания");

        let request = form.validated_request().unwrap();
        let api = FakeApi::answering(Ok(persisted(42, &request)));

        form.submit(&api).await.unwrap();
        assert_eq!(api.request_count(), 1);

        let sent = api.last_request();
        assert_eq!(sent.room_id, "2");
        assert_eq!(sent.room_name, "Стандарт \"Сосна\"");
        assert_eq!(sent.guests_count, 3);

        // The wire encoding carries calendar dates only, no time component.
        let value = serde_json::to_value(&sent).unwrap();
        assert_eq!(value["check_in_date"], "2024-12-01");
        assert_eq!(value["check_out_date"], "2024-12-05");
    }

    #[tokio::test]
    async fn success_resets_contact_fields_and_keeps_dates() {
        let mut form = filled_form();
        form.set_guests_count(2);
        form.set_comment("У окна, пожалуйста");

        let request = form.validated_request().unwrap();
        let api = FakeApi::answering(Ok(persisted(42, &request)));

        let booking = form.submit(&api).await.unwrap();
        assert_eq!(booking.id, 42);

        assert_eq!(form.guest_name(), "");
        assert_eq!(form.guest_phone(), "");
        assert_eq!(form.comment(), "");
        assert_eq!(form.guests_count(), 1);
        assert!(!form.is_dialog_open());
        assert!(!form.is_submitting());

        // The dates keep their values after a successful submission.
        assert_eq!(form.check_in_date(), NaiveDate::from_ymd_opt(2024, 12, 1));
        assert_eq!(form.selected_room().unwrap().id(), "2");
    }

    #[tokio::test]
    async fn a_remote_error_preserves_the_entered_values() {
        let mut form = filled_form();
        form.set_comment("Привезём собаку");

        let api = FakeApi::answering(Err(ApiError::remote(
            ApiOperation::Create,
            409,
            Some("Room unavailable".to_string()),
        )));

        let err = form.submit(&api).await.unwrap_err();
        assert_eq!(err.user_message(), "Room unavailable");

        assert_eq!(form.guest_name(), "Иван");
        assert_eq!(form.guest_phone(), "+7 (999) 123-45-67");
        assert_eq!(form.comment(), "Привезём собаку");
        assert!(form.is_dialog_open());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn a_transport_error_shows_the_connection_message() {
        let cause = reqwest::Client::new()
            .get("http://")
            .send()
            .await
            .unwrap_err();

        let mut form = filled_form();
        let api = FakeApi::answering(Err(ApiError::transport(ApiOperation::Create, cause)));

        let err = form.submit(&api).await.unwrap_err();
        assert_eq!(err.user_message(), "Проблема с подключением к серверу");
        assert_eq!(form.guest_name(), "Иван");
    }

    #[tokio::test]
    async fn a_remote_error_without_message_falls_back_to_the_generic_one() {
        let mut form = filled_form();
        let api = FakeApi::answering(Err(ApiError::remote(ApiOperation::Create, 500, None)));

        let err = form.submit(&api).await.unwrap_err();
        assert_eq!(err.user_message(), "Не удалось создать бронирование");
    }
}
