pub mod content;
pub mod lookup;
pub mod ownership;
pub mod patch;
pub mod user;
