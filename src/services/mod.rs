pub mod api_client;

pub use api_client::{interpret_action_response, interpret_response, ApiClient};
