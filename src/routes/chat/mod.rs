mod handler;
mod model;

pub use handler::{chat_id, chat_list};
pub use model::{ChatIdResponse, ChatListResponse};
