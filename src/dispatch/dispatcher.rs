/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::dispatch::classifier::DispatchError;
use crate::dispatch::scheduler;
use crate::shared::{ElevatorState, Request, Route};

/**
 * Serializes access to one car's `ElevatorState`.
 *
 * The `Dispatcher` owns the persisted elevator state and processes request
 * batches one at a time. For each batch it computes the SCAN route, replies
 * on `route_tx`, then commits every stop in order, broadcasting the car's
 * position after each one. A served batch leaves the car idle, so the
 * travel direction is cleared before the next batch resolves its own.
 *
 * # Fields
 * - `batch_rx`:      Receives pending request batches from the host.
 * - `route_tx`:      Replies with the scheduled route, or the error that
 *                    rejected the batch.
 * - `state_tx`:      Broadcasts the elevator state once per visited stop.
 * - `terminate_rx`:  Shuts the worker down.
 * - `state`:         Current floor and travel direction of the car.
 * - `max_floor`:     Highest serviceable floor.
 */
pub struct Dispatcher {
    // Host channels
    batch_rx: cbc::Receiver<Vec<Request>>,
    route_tx: cbc::Sender<Result<Route, DispatchError>>,
    state_tx: cbc::Sender<ElevatorState>,
    terminate_rx: cbc::Receiver<()>,

    // Private fields
    state: ElevatorState,
    max_floor: u8,
}

impl Dispatcher {
    pub fn new(
        config: &ElevatorConfig,
        initial_floor: u8,
        batch_rx: cbc::Receiver<Vec<Request>>,
        route_tx: cbc::Sender<Result<Route, DispatchError>>,
        state_tx: cbc::Sender<ElevatorState>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Dispatcher {
        Dispatcher {
            batch_rx,
            route_tx,
            state_tx,
            terminate_rx,
            state: ElevatorState::new(initial_floor),
            max_floor: config.max_floor,
        }
    }

    pub fn run(mut self) {
        loop {
            cbc::select! {
                recv(self.batch_rx) -> batch => {
                    match batch {
                        Ok(batch) => self.handle_batch(batch),
                        Err(e) => {
                            error!("Error receiving from batch_rx: {}", e);
                            break;
                        }
                    }
                }
                recv(self.terminate_rx) -> _msg => {
                    break;
                }
            }
        }
    }

    fn handle_batch(&mut self, batch: Vec<Request>) {
        match scheduler::process_batch(&self.state, &batch, self.max_floor) {
            Ok((next_state, route)) => {
                self.state = next_state;
                info!("scheduled stop order {:?}", route);
                let _ = self.route_tx.send(Ok(route.clone()));

                // Commit each stop in order and broadcast the car's position
                for &floor in &route {
                    self.state.floor = floor;
                    let _ = self.state_tx.send(self.state.clone());
                }

                // Every stop is served, the car is idle again
                self.state.direction = None;
            }
            Err(e) => {
                warn!("rejecting batch: {}", e);
                let _ = self.route_tx.send(Err(e));
            }
        }
    }

    #[cfg(test)]
    pub fn test_get_state(&self) -> &ElevatorState {
        &self.state
    }
}
