//! HTTP protocol layer module
//!
//! Response builders shared by the order endpoints and the router.

pub mod response;

pub use response::{
    apply_common_headers, build_404_response, build_405_response, build_options_response,
    error_response, json_response, strip_body,
};
