use sentiero_core::{Point, Scenario};

/// Cost of `0 -> 2 -> 3 -> 5` in the fixed scenario.
pub const FIXED_SHORTEST_COST: f64 = 1055.2057;
/// Cost of `0 -> 1 -> 4 -> 5` in the fixed scenario.
pub const FIXED_LONGER_COST: f64 = 1240.5125;
pub const TOLERANCE: f64 = 1e-3;

#[must_use]
pub fn scenario(coords: &[(f64, f64)], edges: &[(usize, usize)]) -> Scenario {
    Scenario::new(
        coords.iter().copied().map(Point::from).collect(),
        edges.to_vec(),
    )
}

/// Two triangles with no edge between them. Nodes 0 and 5 are farthest apart.
#[must_use]
pub fn two_components() -> Scenario {
    scenario(
        &[
            (100.0, 100.0),
            (150.0, 200.0),
            (200.0, 100.0),
            (900.0, 500.0),
            (950.0, 400.0),
            (1000.0, 600.0),
        ],
        &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
    )
}
