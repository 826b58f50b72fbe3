pub mod board;
pub mod message_area;
