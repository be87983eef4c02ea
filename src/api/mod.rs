//! The HTTP-facing envelope around the engine. Routing and auth live elsewhere;
//! this layer turns a parsed request into a status code and a JSON body.

pub mod assassinations;

pub use assassinations::{
    ApiResponse, AssassinationRequest, AssassinationResponse, handle_assassination, handle_raw,
};
