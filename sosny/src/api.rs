use crate::booking::{Booking, BookingRequest};
use crate::config::Config;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use std::fmt;

/// The result type as used by this module.
pub type ApiResult<T> = Result<T, ApiError>;

// Transport problems are not distinguished further when shown to the user.
const CONNECTION_MESSAGE: &str = "Проблема с подключением к серверу";

/// Something which can create and list bookings. The remote booking API is the
/// single source of truth and assigns booking identifiers and creation
/// timestamps; the trait exists so the form and admin flows do not care where
/// the bookings actually live.
#[async_trait]
pub trait BookingApi {
    /// Create a new booking from the given payload, returning the persisted
    /// booking with its assigned id, creation time and default status.
    async fn create_booking(&self, request: &BookingRequest) -> ApiResult<Booking>;

    /// Retrieve all bookings.
    async fn list_bookings(&self) -> ApiResult<Vec<Booking>>;

    /// Retrieve only the bookings for the room with the given identifier.
    async fn bookings_for_room(&self, room_id: &str) -> ApiResult<Vec<Booking>>;
}

/// Client for the remote booking API. A single endpoint serves both booking
/// creation (POST) and the booking list (GET). No client side timeout is set;
/// the transport defaults apply.
#[derive(Debug, Clone)]
pub struct RemoteBookingApi {
    client: reqwest::Client,
    url: String,
}

impl RemoteBookingApi {
    /// Create a new client for the configured booking endpoint.
    pub fn new(config: &Config) -> Self {
        RemoteBookingApi {
            client: reqwest::Client::new(),
            url: config.bookings_url().to_string(),
        }
    }

    async fn decode_list(response: reqwest::Response) -> ApiResult<Vec<Booking>> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(ApiOperation::List, response).await);
        }
        let list = response
            .json::<BookingList>()
            .await
            .map_err(|e| ApiError::transport(ApiOperation::List, e))?;
        Ok(list.bookings)
    }
}

#[async_trait]
impl BookingApi for RemoteBookingApi {
    async fn create_booking(&self, request: &BookingRequest) -> ApiResult<Booking> {
        debug!(
            "submitting booking for room {} to {}",
            request.room_id, self.url
        );
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::transport(ApiOperation::Create, e))?;
        if !response.status().is_success() {
            return Err(ApiError::from_response(ApiOperation::Create, response).await);
        }
        response
            .json::<Booking>()
            .await
            .map_err(|e| ApiError::transport(ApiOperation::Create, e))
    }

    async fn list_bookings(&self) -> ApiResult<Vec<Booking>> {
        debug!("loading bookings from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ApiError::transport(ApiOperation::List, e))?;
        Self::decode_list(response).await
    }

    async fn bookings_for_room(&self, room_id: &str) -> ApiResult<Vec<Booking>> {
        debug!("loading bookings for room {} from {}", room_id, self.url);
        let response = self
            .client
            .get(&self.url)
            .query(&[("room_id", room_id)])
            .send()
            .await
            .map_err(|e| ApiError::transport(ApiOperation::List, e))?;
        Self::decode_list(response).await
    }
}

/// Response shape of the list request. A response without the list means no
/// bookings.
#[derive(Debug, Deserialize)]
struct BookingList {
    #[serde(default)]
    bookings: Vec<Booking>,
}

/// Error payload of a non-success response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// An error while talking to the remote booking API.
#[derive(Debug)]
pub struct ApiError {
    operation: ApiOperation,
    cause: ErrorCause,
}

/// The operation during which an API error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    /// Creating a new booking.
    Create,
    /// Listing existing bookings.
    List,
    /// Notifying the admin about a new booking.
    Notify,
}

impl ApiOperation {
    fn fallback_message(&self) -> &'static str {
        match self {
            ApiOperation::Create => "Не удалось создать бронирование",
            ApiOperation::List => "Не удалось загрузить бронирования",
            ApiOperation::Notify => "Не удалось отправить уведомление",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ApiOperation::Create => "creating a booking",
                ApiOperation::List => "listing bookings",
                ApiOperation::Notify => "sending the admin notification",
            }
        )
    }
}

#[derive(Debug)]
enum ErrorCause {
    /// The request settled without a usable response.
    Transport(reqwest::Error),
    /// The remote answered with a non-success status.
    Remote {
        status: u16,
        message: Option<String>,
    },
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCause::Transport(e) => write!(f, "{}", e),
            ErrorCause::Remote { status, message } => match message {
                Some(message) => write!(f, "remote returned status {}: {}", status, message),
                None => write!(f, "remote returned status {}", status),
            },
        }
    }
}

impl ApiError {
    /// Create a new error for a request which failed before a usable response
    /// arrived.
    pub fn transport(operation: ApiOperation, error: reqwest::Error) -> Self {
        ApiError {
            operation,
            cause: ErrorCause::Transport(error),
        }
    }

    /// Create a new error from a non-success remote status and the
    /// server-provided error message, if there was one.
    pub fn remote(operation: ApiOperation, status: u16, message: Option<String>) -> Self {
        ApiError {
            operation,
            cause: ErrorCause::Remote { status, message },
        }
    }

    async fn from_response(operation: ApiOperation, response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        ApiError::remote(operation, status, message)
    }

    /// The operation during which this error occurred.
    pub fn operation(&self) -> ApiOperation {
        self.operation
    }

    /// Status code of the remote response, if the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self.cause {
            ErrorCause::Remote { status, .. } => Some(status),
            ErrorCause::Transport(_) => None,
        }
    }

    /// The message to show to the user: the server-provided error message when
    /// one is present, the operation's generic message for other remote
    /// failures, and the connection message for transport failures.
    pub fn user_message(&self) -> String {
        match self.cause {
            ErrorCause::Transport(_) => CONNECTION_MESSAGE.to_string(),
            ErrorCause::Remote { ref message, .. } => match message {
                Some(message) => message.clone(),
                None => self.operation.fallback_message().to_string(),
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "error while {}: {}", self.operation, self.cause)
    }
}

impl std::error::Error for ApiError {
    fn cause(&self) -> Option<&dyn std::error::Error> {
        match self.cause {
            ErrorCause::Transport(ref e) => Some(e),
            ErrorCause::Remote { .. } => None,
        }
    }
}
