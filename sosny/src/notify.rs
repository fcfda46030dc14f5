use crate::api::{ApiError, ApiOperation, ApiResult};
use crate::booking::BookingRequest;
use crate::config::Config;
use log::{debug, info};

// Placeholders used in the notification body.
const NOT_SET: &str = "Не указано";
const NO_COMMENT: &str = "Нет";

/// Sends admin notifications about freshly created bookings to the configured
/// notification endpoint. A failed notification never affects the booking
/// itself; callers log the error and move on.
#[derive(Debug, Clone)]
pub struct AdminNotifier {
    client: reqwest::Client,
    url: Option<String>,
}

impl AdminNotifier {
    /// Create a notifier for the configured notification endpoint, if any.
    pub fn new(config: &Config) -> Self {
        AdminNotifier {
            client: reqwest::Client::new(),
            url: config.notify_url().map(str::to_string),
        }
    }

    /// Notify the admin about a freshly created booking. When no endpoint is
    /// configured the notification is skipped and the call succeeds without
    /// making any request.
    pub async fn booking_created(&self, request: &BookingRequest) -> ApiResult<()> {
        let url = match self.url {
            Some(ref url) => url,
            None => {
                info!("notification endpoint not configured, notification skipped");
                return Ok(());
            }
        };

        debug!(
            "notifying admin about a booking for room {}",
            request.room_name
        );
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::transport(ApiOperation::Notify, e))?;
        if !response.status().is_success() {
            return Err(ApiError::remote(
                ApiOperation::Notify,
                response.status().as_u16(),
                None,
            ));
        }
        Ok(())
    }
}

/// Build the plain-text admin summary of a booking request, subject line
/// first.
pub fn notification_text(request: &BookingRequest) -> String {
    let check_out = request
        .check_out_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| NOT_SET.to_string());
    let comment = if request.comment.is_empty() {
        NO_COMMENT
    } else {
        &request.comment
    };
    format!(
        "Новое бронирование: {room}\n\
         \n\
         Номер: {room}\n\
         Гость: {guest}\n\
         Телефон: {phone}\n\
         Дата заезда: {check_in}\n\
         Дата выезда: {check_out}\n\
         Количество гостей: {guests}\n\
         Комментарий: {comment}\n",
        room = request.room_name,
        guest = request.guest_name,
        phone = request.guest_phone,
        check_in = request.check_in_date,
        check_out = check_out,
        guests = request.guests_count,
        comment = comment,
    )
}
