use serde::Deserialize;

/// Marker section; the in-memory store has nothing to tune.
#[derive(Deserialize)]
pub struct DbMemoryConfig {}
