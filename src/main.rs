/* 3rd party libraries */
use clap::Arg;
use crossbeam_channel as cbc;
use env_logger::Env;
use log::{error, info, warn};
use std::thread::Builder;

/* Custom libraries */
use dispatch::DispatchError;
use dispatch::Dispatcher;
use shared::{ElevatorState, Request, Route};

/* Modules */
mod config;
mod dispatch;
mod shared;

/* Main */
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Parse the command line
    let matches = clap::Command::new("elevator-dispatch")
        .about("SCAN dispatch for a single elevator car")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .takes_value(true)
                .default_value("scenarios/demo.toml"),
        )
        .get_matches();

    // Load the configuration and the scenario
    let config = unwrap_or_exit!(config::load_config(matches.value_of("config").unwrap()));
    let scenario = unwrap_or_exit!(config::load_scenario(matches.value_of("scenario").unwrap()));

    let max_floor = config.elevator.max_floor;
    if !(1..=max_floor).contains(&scenario.initial_floor) {
        error!(
            "initial floor {} is outside 1..={}",
            scenario.initial_floor, max_floor
        );
        std::process::exit(1);
    }

    // Initialize channels
    let (batch_tx, batch_rx) = cbc::unbounded::<Vec<Request>>();
    let (route_tx, route_rx) = cbc::unbounded::<Result<Route, DispatchError>>();
    let (state_tx, state_rx) = cbc::unbounded::<ElevatorState>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the dispatcher module
    let dispatcher = Dispatcher::new(
        &config.elevator,
        scenario.initial_floor,
        batch_rx,
        route_tx,
        state_tx,
        terminate_rx,
    );

    let dispatcher_thread = Builder::new().name("dispatcher".into());
    let dispatcher_handle = dispatcher_thread
        .spawn(move || dispatcher.run())
        .unwrap();

    // Feed the scenario batches and commit each recommended stop in turn
    info!("car starts at {}F", scenario.initial_floor);
    let mut current_floor = scenario.initial_floor;

    for (number, batch) in scenario.batches.iter().enumerate() {
        info!("batch {}: {} request(s)", number + 1, batch.requests.len());

        if batch_tx.send(batch.requests.clone()).is_err() {
            error!("dispatcher is gone, aborting");
            break;
        }

        match route_rx.recv() {
            Ok(Ok(route)) => {
                info!("stop order: {:?}", route);
                for _ in 0..route.len() {
                    match state_rx.recv() {
                        Ok(state) => {
                            let arrow = if state.floor > current_floor { "up" } else { "down" };
                            info!("moving {} from {}F to {}F", arrow, current_floor, state.floor);
                            current_floor = state.floor;
                        }
                        Err(e) => {
                            error!("Error receiving from state_rx: {}", e);
                            break;
                        }
                    }
                }
                info!("batch {} complete, car at {}F", number + 1, current_floor);
            }
            Ok(Err(e)) => warn!("batch {} rejected: {}", number + 1, e),
            Err(e) => {
                error!("Error receiving from route_rx: {}", e);
                break;
            }
        }
    }

    let _ = terminate_tx.send(());
    let _ = dispatcher_handle.join();
}
