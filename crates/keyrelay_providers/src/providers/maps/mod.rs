//! Mapping and geolocation providers.

mod google_maps;
mod mapbox;

pub use google_maps::GoogleMapsProvider;
pub use mapbox::MapboxProvider;
