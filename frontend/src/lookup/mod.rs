pub mod controller;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod prices;
pub mod ticker;
pub mod view;
