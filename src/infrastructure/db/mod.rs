mod connection;
mod tweets;

pub use connection::connect;
pub use tweets::{TweetInsertBatch, TweetRepository};
