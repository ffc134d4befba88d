use crate::graph::OrientedEdge;

pub type Weight = f64;
pub type Milliseconds = u64;

pub trait Weighting {
    fn calc_edge_weight(&self, edge: &OrientedEdge) -> Weight;
    fn calc_edge_ms(&self, edge: &OrientedEdge) -> Milliseconds;
}

/// Weighs every edge by its travel time at a constant speed.
pub struct FixedSpeedWeighting {
    speed_kmh: f64,
}

impl FixedSpeedWeighting {
    pub fn new(speed_kmh: f64) -> Self {
        FixedSpeedWeighting { speed_kmh }
    }
}

impl Weighting for FixedSpeedWeighting {
    fn calc_edge_weight(&self, edge: &OrientedEdge) -> Weight {
        self.calc_edge_ms(edge) as Weight / 1000.0
    }

    fn calc_edge_ms(&self, edge: &OrientedEdge) -> Milliseconds {
        let speed_meters_per_second = self.speed_kmh / 3.6;
        let ms = (edge.distance.value() / speed_meters_per_second) * 1000.0;

        ms.round() as Milliseconds
    }
}
