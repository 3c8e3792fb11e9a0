pub mod aggregator;
pub mod danceability;
pub mod fetcher;
pub mod model;
pub mod sequencer;
pub mod weekend_filter;
