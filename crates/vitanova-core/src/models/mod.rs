pub mod account;
pub mod booking;
pub mod content;
pub mod forum;
pub mod goal;
pub mod journal;
pub mod mood;
pub mod screening;
