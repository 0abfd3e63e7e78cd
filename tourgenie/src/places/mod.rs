mod client;

pub use client::PlaceSearchClient;
