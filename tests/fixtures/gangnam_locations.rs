//! Real Gangnam-district locations for realistic test fixtures.
//!
//! Coordinates are street-level points around the district's main
//! intersections, where the simulated drain fleet is densest.

/// A named site with coordinates.
#[derive(Debug, Clone)]
pub struct Site {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Site {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

/// Storm-drain sites spread across the district. Roughly 1–5 km apart,
/// matching the tour sizes the optimizer is built for.
pub const DRAIN_SITES: &[Site] = &[
    Site::new("Gangnam Station crossroads", 37.4979, 127.0276),
    Site::new("Yeoksam Station", 37.5006, 127.0364),
    Site::new("Seolleung Station", 37.5045, 127.0491),
    Site::new("Samseong Station", 37.5088, 127.0631),
    Site::new("Apgujeong Rodeo", 37.5273, 127.0388),
    Site::new("Cheongdam crossroads", 37.5194, 127.0519),
    Site::new("Dogok Station", 37.4911, 127.0552),
    Site::new("Daechi Station", 37.4945, 127.0636),
    Site::new("Nonhyeon Station", 37.5111, 127.0214),
    Site::new("Sinsa Station", 37.5163, 127.0203),
    Site::new("Maebong Station", 37.4871, 127.0467),
    Site::new("Hanti Station", 37.4962, 127.0527),
];
