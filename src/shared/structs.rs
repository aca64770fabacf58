/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Where a request was issued: a hall panel on some floor, or the cab panel.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Floor(u8),
    Cab,
}

/// What the button press asked for: a concrete destination floor, or just
/// a travel direction (hall panels announce a direction, not a target).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Floor(u8),
    Up,
    Down,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub origin: Origin,
    pub command: Command,
}

/// A batch of requests split by travel direction.
///
/// `hall_up`/`hall_down` map the origin floor to the destination floor when
/// one is known (a hall call that only announced a direction maps to `None`).
/// An origin floor appears in at most one of the two maps. `cab_calls` is a
/// plain set of destination floors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassifiedRequests {
    pub hall_up: BTreeMap<u8, Option<u8>>,
    pub hall_down: BTreeMap<u8, Option<u8>>,
    pub cab_calls: BTreeSet<u8>,
}

/// The ordered list of floors the car should visit next.
pub type Route = Vec<u8>;

/// The only state carried between scheduling calls. `direction` is `None`
/// until a batch forces a resolution, and again whenever the host decides
/// the car is idle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    pub floor: u8,
    pub direction: Option<Direction>,
}

impl ElevatorState {
    pub fn new(initial_floor: u8) -> ElevatorState {
        ElevatorState {
            floor: initial_floor,
            direction: None,
        }
    }
}
