use crate::exception::ErrorCategory;

/// Canonical mapping from an HTTP status to its [`ErrorCategory`].
///
/// Statuses without a dedicated category (409, 503, ...) fall through to
/// [`ErrorCategory::Unexpected`].
pub fn category_for_status(http_status: u16) -> ErrorCategory {
    match http_status {
        400 => ErrorCategory::BadRequest,
        401 => ErrorCategory::Authentication,
        403 => ErrorCategory::Forbidden,
        404 => ErrorCategory::NotFound,
        429 => ErrorCategory::TooManyRequests,
        500 => ErrorCategory::InternalApplication,
        _ => ErrorCategory::Unexpected,
    }
}

/// The status a category is derived from, or `None` for the catch-all.
pub fn status_for_category(category: ErrorCategory) -> Option<u16> {
    match category {
        ErrorCategory::BadRequest => Some(400),
        ErrorCategory::Authentication => Some(401),
        ErrorCategory::Forbidden => Some(403),
        ErrorCategory::NotFound => Some(404),
        ErrorCategory::TooManyRequests => Some(429),
        ErrorCategory::InternalApplication => Some(500),
        ErrorCategory::Unexpected => None,
    }
}

/// Client and server error statuses; only these can carry an error envelope.
pub fn is_failure_status(http_status: u16) -> bool {
    (400..=599).contains(&http_status)
}
