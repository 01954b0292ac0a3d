use actix_web::dev::Payload;
use actix_web::rt::task::JoinHandle;
use actix_web::web;
use validator::ValidationErrors;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

pub fn spawn_blocking_with_tracing<F, R>(f: F) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let current_span = tracing::Span::current();
    actix_web::rt::task::spawn_blocking(move || current_span.in_scope(f))
}

// Puts an already consumed body back so downstream extractors can read it again.
pub fn bytes_to_payload(buf: web::Bytes) -> Payload {
    let (_, mut pl) = actix_http::h1::Payload::create(true);
    pl.unread_data(buf);
    Payload::from(pl)
}

pub fn is_json_request(content_type: Option<&str>) -> bool {
    content_type
        .map(|value| value.trim().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false)
}

/// Flattens validator output into a single customer facing line such as
/// `"email: invalid email; pincode: pincode must be 6 digits"`.
pub fn validation_error_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: invalid {}", field, error.code),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
