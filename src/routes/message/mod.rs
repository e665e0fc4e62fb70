mod handler;
mod model;

pub use handler::send_message;
pub use model::SendMessageRequest;
