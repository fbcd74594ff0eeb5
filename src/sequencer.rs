//! Route sequencer: nearest-neighbour construction + 2-opt improvement.
//!
//! Works on a single depot-anchored route. The depot sits at matrix index 0
//! and stop `k` (in filtered input order) at index `k + 1`, so the matrix is
//! addressed by stop identity and stays valid while 2-opt reorders the
//! route.
//!
//! This is a local search. It converges to a 2-opt local optimum, not to the
//! optimal tour.

use tracing::{debug, trace, warn};

use crate::haversine::HaversineMatrix;
use crate::matrix::DistanceMatrix;
use crate::model::{Coordinate, Stop};
use crate::traits::DistanceMatrixProvider;

/// Matrix index of the depot.
const DEPOT: usize = 0;

/// A reversal must shorten the route by more than this to be accepted.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Orders stops to approximately minimise the depot round trip.
///
/// Stops without a valid location are dropped. Each returned stop carries
/// its zero-based `order_index`.
pub fn optimize_route(stops: &[Stop], depot: Coordinate) -> Vec<Stop> {
    optimize_route_with(stops, depot, &HaversineMatrix, None)
}

/// Nearest-neighbour order only, without 2-opt improvement.
pub fn construct_route(stops: &[Stop], depot: Coordinate) -> Vec<Stop> {
    sequence(stops, depot, &HaversineMatrix, |_, order| order)
}

/// [`optimize_route`] with an explicit distance source and an optional cap
/// on 2-opt passes.
pub fn optimize_route_with<M>(
    stops: &[Stop],
    depot: Coordinate,
    matrix_provider: &M,
    max_passes: Option<usize>,
) -> Vec<Stop>
where
    M: DistanceMatrixProvider,
{
    sequence(stops, depot, matrix_provider, |matrix, order| {
        two_opt(order, matrix, max_passes)
    })
}

fn sequence<M, F>(stops: &[Stop], depot: Coordinate, matrix_provider: &M, improve: F) -> Vec<Stop>
where
    M: DistanceMatrixProvider,
    F: FnOnce(&DistanceMatrix, Vec<usize>) -> Vec<usize>,
{
    let located: Vec<(&Stop, Coordinate)> = stops
        .iter()
        .filter_map(|stop| stop.valid_location().map(|location| (stop, location)))
        .collect();

    if located.len() < stops.len() {
        debug!(
            dropped = stops.len() - located.len(),
            "skipping stops without valid coordinates"
        );
    }

    match located.len() {
        0 => return Vec::new(),
        1 => return vec![with_order_index(located[0].0, 0)],
        _ => {}
    }

    if !depot.is_valid() {
        warn!(lat = depot.lat, lng = depot.lng, "depot has invalid coordinates");
    }

    let mut points = Vec::with_capacity(located.len() + 1);
    points.push(depot);
    points.extend(located.iter().map(|(_, location)| *location));
    let matrix = matrix_provider.matrix_for(&points);

    let order = nearest_neighbor_order(&matrix, located.len());
    let order = improve(&matrix, order);

    order
        .into_iter()
        .enumerate()
        .map(|(position, stop)| with_order_index(located[stop].0, position))
        .collect()
}

fn with_order_index(stop: &Stop, position: usize) -> Stop {
    let mut stop = stop.clone();
    stop.order_index = Some(position);
    stop
}

/// Greedy construction over `stop_count` stops, starting at the depot.
///
/// Returns stop indices (matrix index minus one). Ties go to the stop seen
/// first. If no remaining stop is reachable from the current position the
/// rest are appended in input order.
pub fn nearest_neighbor_order(matrix: &DistanceMatrix, stop_count: usize) -> Vec<usize> {
    let mut visited = vec![false; stop_count];
    let mut order = Vec::with_capacity(stop_count);
    let mut current = DEPOT;

    while order.len() < stop_count {
        let mut best: Option<(usize, f64)> = None;
        for stop in 0..stop_count {
            if visited[stop] {
                continue;
            }
            let Some(km) = matrix.distance(current, stop + 1) else {
                continue;
            };
            if best.is_none_or(|(_, best_km)| km < best_km) {
                best = Some((stop, km));
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                order.push(next);
                current = next + 1;
            }
            None => {
                warn!(
                    remaining = stop_count - order.len(),
                    "no reachable stop from current position, appending in input order"
                );
                order.extend((0..stop_count).filter(|stop| !visited[*stop]));
                break;
            }
        }
    }

    debug!(stops = stop_count, "nearest-neighbour construction complete");
    order
}

/// 2-opt over the stop path (first and last stops keep their positions, so
/// the depot legs never change).
///
/// For edges (i, i+1) and (j-1, j) the segment between them is reversed
/// whenever `d(i, j-1) + d(i+1, j)` is strictly shorter. Passes repeat until
/// one finds no improving move or `max_passes` is reached.
pub fn two_opt(mut order: Vec<usize>, matrix: &DistanceMatrix, max_passes: Option<usize>) -> Vec<usize> {
    let n = order.len();
    if n < 4 {
        return order;
    }

    let km = |a: usize, b: usize| matrix.distance(a + 1, b + 1).unwrap_or(f64::INFINITY);
    let mut passes = 0;

    loop {
        if max_passes.is_some_and(|limit| passes >= limit) {
            warn!(passes, "2-opt stopped at pass limit before converging");
            break;
        }
        passes += 1;

        let mut improved = false;
        for i in 0..n - 2 {
            for j in i + 2..n {
                let current = km(order[i], order[i + 1]) + km(order[j - 1], order[j]);
                let reversed = km(order[i], order[j - 1]) + km(order[i + 1], order[j]);
                if reversed + IMPROVEMENT_EPSILON < current {
                    trace!(i, j, gain = current - reversed, "2-opt reversal");
                    order[i + 1..j].reverse();
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    debug!(passes, "2-opt finished");
    order
}
