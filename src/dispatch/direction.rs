/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ClassifiedRequests, Direction, ElevatorState};

/// Direction chosen when upward and downward demand are equal.
pub const TIE_BREAK_DIRECTION: Direction = Direction::Up;

/***************************************/
/*             Public API              */
/***************************************/
/// Picks an initial travel direction for a car that has none.
///
/// Upward demand counts hall-up origins at or above the current floor and
/// cab calls strictly above it; downward demand is the mirror image. The
/// larger side wins, ties go to `TIE_BREAK_DIRECTION`.
pub fn resolve(state: &ElevatorState, classified: &ClassifiedRequests) -> Direction {
    let floor = state.floor;

    let hall_up = classified.hall_up.keys().filter(|&&f| f >= floor).count();
    let hall_down = classified.hall_down.keys().filter(|&&f| f <= floor).count();
    let cab_up = classified.cab_calls.iter().filter(|&&f| f > floor).count();
    let cab_down = classified.cab_calls.iter().filter(|&&f| f < floor).count();

    let total_up = hall_up + cab_up;
    let total_down = hall_down + cab_down;

    if total_up > total_down {
        Direction::Up
    } else if total_down > total_up {
        Direction::Down
    } else {
        TIE_BREAK_DIRECTION
    }
}
