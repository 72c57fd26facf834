//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod send_message;

pub use send_message::{
    PayloadDestination, PayloadMessage, RequestPayload, SEND_PATH, build_headers,
    build_request_body, build_url, normalize_response, normalize_transport_error,
};
