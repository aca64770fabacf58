/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ClassifiedRequests, Command, Origin, Request};

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("origin floor {floor} is outside 1..={max_floor}")]
    InvalidOrigin { floor: u8, max_floor: u8 },
    #[error("command floor {floor} is outside 1..={max_floor}")]
    InvalidCommand { floor: u8, max_floor: u8 },
    #[error("cab call carries no destination floor")]
    CabWithoutDestination,
}

/***************************************/
/*             Public API              */
/***************************************/
/// Partitions a raw batch into hall-up, hall-down and cab requests.
///
/// Requests are handled in input order. The first classification for a hall
/// origin wins; later requests for the same origin are ignored. A request
/// whose origin and destination are the same floor implies no motion and is
/// dropped. Any floor outside `1..=max_floor` fails the whole batch.
pub fn classify(batch: &[Request], max_floor: u8) -> Result<ClassifiedRequests, DispatchError> {
    let mut classified = ClassifiedRequests::default();

    for request in batch {
        match (request.origin, request.command) {
            (Origin::Cab, Command::Floor(destination)) => {
                check_command_floor(destination, max_floor)?;
                classified.cab_calls.insert(destination);
            }
            (Origin::Cab, Command::Up) | (Origin::Cab, Command::Down) => {
                return Err(DispatchError::CabWithoutDestination);
            }
            (Origin::Floor(origin), command) => {
                if !in_range(origin, max_floor) {
                    return Err(DispatchError::InvalidOrigin {
                        floor: origin,
                        max_floor,
                    });
                }
                if let Command::Floor(destination) = command {
                    check_command_floor(destination, max_floor)?;
                }

                // First classification for a hall origin wins
                if classified.hall_up.contains_key(&origin)
                    || classified.hall_down.contains_key(&origin)
                {
                    continue;
                }

                match command {
                    Command::Up => {
                        classified.hall_up.insert(origin, None);
                    }
                    Command::Down => {
                        classified.hall_down.insert(origin, None);
                    }
                    Command::Floor(destination) if destination > origin => {
                        classified.hall_up.insert(origin, Some(destination));
                    }
                    Command::Floor(destination) if destination < origin => {
                        classified.hall_down.insert(origin, Some(destination));
                    }
                    Command::Floor(_) => {
                        debug!("dropping degenerate request at floor {}", origin);
                    }
                }
            }
        }
    }

    Ok(classified)
}

/***************************************/
/*         Private functions           */
/***************************************/
fn in_range(floor: u8, max_floor: u8) -> bool {
    (1..=max_floor).contains(&floor)
}

fn check_command_floor(floor: u8, max_floor: u8) -> Result<(), DispatchError> {
    if in_range(floor, max_floor) {
        Ok(())
    } else {
        Err(DispatchError::InvalidCommand { floor, max_floor })
    }
}
