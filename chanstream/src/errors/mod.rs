/// Turns an error into a status code after logging it with its position.
#[macro_export]
macro_rules! something_with_error_log {
    ($position:expr, $status_code:expr) => {
        |e| {
            use log::error;

            error!("{}: {}", $position, e);
            $status_code
        }
    };
}

#[macro_export]
macro_rules! internal_error_with_log {
    ($msg:expr) => {{
        use axum::http::StatusCode;
        $crate::something_with_error_log!($msg, StatusCode::INTERNAL_SERVER_ERROR)
    }};
}

/// Logs a missing resource at debug level, it is a client mistake.
#[macro_export]
macro_rules! not_found_with_log {
    ($msg:expr) => {{
        use axum::http::StatusCode;
        use log::debug;

        debug!("{}: not found", $msg);
        StatusCode::NOT_FOUND
    }};
}

pub use internal_error_with_log;
pub use not_found_with_log;
pub use something_with_error_log;
