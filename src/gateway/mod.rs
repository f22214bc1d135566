//! Request/response descriptors exchanged with the HTTP gateway.
//!
//! A handler never sees a socket: it receives a [`GatewayRequest`] and
//! returns a [`GatewayResponse`], both shaped like the gateway's JSON event.

mod request;
mod response;

pub use request::GatewayRequest;
pub use response::GatewayResponse;
