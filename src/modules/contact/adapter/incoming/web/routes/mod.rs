pub mod create_message;
pub mod delete_message;
pub mod get_message;
pub mod list_messages;
pub mod message_stats;
pub mod update_message_status;

pub use create_message::create_message_handler;
pub use delete_message::delete_message_handler;
pub use get_message::get_message_handler;
pub use list_messages::list_messages_handler;
pub use message_stats::message_stats_handler;
pub use update_message_status::update_message_status_handler;
