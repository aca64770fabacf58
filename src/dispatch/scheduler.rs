/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatch::classifier::{classify, DispatchError};
use crate::dispatch::direction;
use crate::shared::{ClassifiedRequests, Direction, ElevatorState, Request, Route};

/***************************************/
/*             Public API              */
/***************************************/
/// All floors the car must visit for this batch, current floor excluded.
pub fn stop_set(state: &ElevatorState, classified: &ClassifiedRequests) -> BTreeSet<u8> {
    let mut stops = BTreeSet::new();

    for (&origin, &destination) in &classified.hall_up {
        stops.insert(origin);
        if let Some(floor) = destination {
            stops.insert(floor);
        }
    }
    for (&origin, &destination) in &classified.hall_down {
        stops.insert(origin);
        if let Some(floor) = destination {
            stops.insert(floor);
        }
    }
    stops.extend(classified.cab_calls.iter().copied());

    // Already there
    stops.remove(&state.floor);
    stops
}

/// SCAN visiting order for the classified batch.
///
/// Serves the full half of the building in the car's direction of travel in
/// strict floor order, then the opposite half, so the direction reverses at
/// most once. Uses the state's direction when set, otherwise resolves one
/// from the batch. Does not mutate `state`.
pub fn schedule(state: &ElevatorState, classified: &ClassifiedRequests) -> Route {
    let stops = stop_set(state, classified);
    if stops.is_empty() {
        return Route::new();
    }

    let effective = match state.direction {
        Some(dir) => dir,
        None => direction::resolve(state, classified),
    };

    scan_route(state.floor, effective, &stops)
}

/// One full batch resolution as a pure state transition.
///
/// Classifies the batch, schedules it, and returns the successor state next
/// to the route. The successor keeps the current floor; its direction is the
/// one the route was scheduled under, or unchanged when there was nothing to
/// do. Advancing the floor along the route is the caller's job.
pub fn process_batch(
    state: &ElevatorState,
    batch: &[Request],
    max_floor: u8,
) -> Result<(ElevatorState, Route), DispatchError> {
    let classified = classify(batch, max_floor)?;

    let stops = stop_set(state, &classified);
    if stops.is_empty() {
        return Ok((state.clone(), Route::new()));
    }

    let effective = match state.direction {
        Some(dir) => dir,
        None => direction::resolve(state, &classified),
    };

    let route = scan_route(state.floor, effective, &stops);
    let next = ElevatorState {
        floor: state.floor,
        direction: Some(effective),
    };

    Ok((next, route))
}

/***************************************/
/*         Private functions           */
/***************************************/
// Ascending run above the car, descending run below it. Concatenation also
// covers the case where the favored half is empty: the route then degrades
// to the opposite half alone.
fn scan_route(floor: u8, direction: Direction, stops: &BTreeSet<u8>) -> Route {
    let above = stops.iter().copied().filter(|&f| f > floor);
    let below = stops.iter().copied().filter(|&f| f < floor).rev();

    match direction {
        Direction::Up => above.chain(below).collect(),
        Direction::Down => below.chain(above).collect(),
    }
}
