/*
 * Unit tests for the dispatcher module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_dispatcher_serves_batch
 * - test_dispatcher_rejects_invalid_batch
 * - test_dispatcher_resolves_direction_per_batch
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use crate::config::ElevatorConfig;
    use crate::dispatch::DispatchError;
    use crate::dispatch::Dispatcher;
    use crate::shared::Command;
    use crate::shared::ElevatorState;
    use crate::shared::Origin;
    use crate::shared::Request;
    use crate::shared::Route;
    use crossbeam_channel::unbounded;
    use crossbeam_channel::Receiver;
    use crossbeam_channel::Sender;
    use std::thread::spawn;
    use std::time::Duration;

    const RECV_TIMEOUT: Duration = Duration::from_secs(3);

    fn setup_dispatcher(
        initial_floor: u8,
    ) -> (
        Dispatcher,
        Sender<Vec<Request>>,                      // batch_tx
        Receiver<Result<Route, DispatchError>>,    // route_rx
        Receiver<ElevatorState>,                   // state_rx
        Sender<()>,                                // terminate_tx
    ) {
        // Arrange mock channels
        let (batch_tx, batch_rx) = unbounded::<Vec<Request>>();
        let (route_tx, route_rx) = unbounded::<Result<Route, DispatchError>>();
        let (state_tx, state_rx) = unbounded::<ElevatorState>();
        let (terminate_tx, terminate_rx) = unbounded::<()>();

        // Default configuration
        let config = ElevatorConfig { max_floor: 10 };

        (
            Dispatcher::new(
                &config,
                initial_floor,
                batch_rx,
                route_tx,
                state_tx,
                terminate_rx,
            ),
            batch_tx,
            route_rx,
            state_rx,
            terminate_tx,
        )
    }

    fn hall(origin: u8, command: Command) -> Request {
        Request {
            origin: Origin::Floor(origin),
            command,
        }
    }

    fn cab(destination: u8) -> Request {
        Request {
            origin: Origin::Cab,
            command: Command::Floor(destination),
        }
    }

    fn recv_route(route_rx: &Receiver<Result<Route, DispatchError>>) -> Result<Route, DispatchError> {
        match route_rx.recv_timeout(RECV_TIMEOUT) {
            Ok(result) => result,
            Err(e) => panic!("Error receiving from route_rx: {:?}", e),
        }
    }

    #[test]
    fn test_dispatcher_serves_batch() {
        // Arrange
        let (dispatcher, batch_tx, route_rx, state_rx, terminate_tx) = setup_dispatcher(1);
        assert_eq!(dispatcher.test_get_state(), &ElevatorState::new(1));
        let dispatcher_thread = spawn(move || dispatcher.run());

        // Act
        // Hall-down calls at 5F, 10F and 3F plus a cab call to 7F
        batch_tx
            .send(vec![
                hall(5, Command::Down),
                hall(10, Command::Down),
                hall(3, Command::Down),
                cab(7),
            ])
            .unwrap();

        // Assert
        let route = recv_route(&route_rx).expect("batch should be accepted");
        assert_eq!(route, vec![3, 5, 7, 10]);

        // One state update per visited stop, in route order
        let mut visited = Vec::new();
        for _ in 0..route.len() {
            match state_rx.recv_timeout(RECV_TIMEOUT) {
                Ok(state) => visited.push(state.floor),
                Err(e) => panic!("Error receiving from state_rx: {:?}", e),
            }
        }
        assert_eq!(visited, route);

        // Cleanup
        terminate_tx.send(()).unwrap();
        dispatcher_thread.join().unwrap();
    }

    #[test]
    fn test_dispatcher_rejects_invalid_batch() {
        // Arrange
        let (dispatcher, batch_tx, route_rx, state_rx, terminate_tx) = setup_dispatcher(1);
        let dispatcher_thread = spawn(move || dispatcher.run());

        // Act
        batch_tx.send(vec![hall(11, Command::Down)]).unwrap();

        // Assert
        let rejected = recv_route(&route_rx);
        assert_eq!(
            rejected,
            Err(DispatchError::InvalidOrigin {
                floor: 11,
                max_floor: 10
            })
        );

        // The car did not move and the dispatcher still serves valid batches
        assert!(state_rx.try_recv().is_err());
        batch_tx.send(vec![cab(7)]).unwrap();
        let route = recv_route(&route_rx).expect("follow-up batch should be accepted");
        assert_eq!(route, vec![7]);

        // Cleanup
        terminate_tx.send(()).unwrap();
        dispatcher_thread.join().unwrap();
    }

    #[test]
    fn test_dispatcher_resolves_direction_per_batch() {
        // Arrange
        let (dispatcher, batch_tx, route_rx, state_rx, terminate_tx) = setup_dispatcher(1);
        let dispatcher_thread = spawn(move || dispatcher.run());

        // Act
        // First batch carries the car up to 5F
        batch_tx.send(vec![hall(5, Command::Down)]).unwrap();
        let first = recv_route(&route_rx).expect("first batch should be accepted");
        assert_eq!(first, vec![5]);
        let _ = state_rx.recv_timeout(RECV_TIMEOUT).unwrap();

        // Second batch leans downward; a stale upward direction would have
        // produced [6, 4, 3] instead
        batch_tx.send(vec![cab(4), cab(3), cab(6)]).unwrap();

        // Assert
        let second = recv_route(&route_rx).expect("second batch should be accepted");
        assert_eq!(second, vec![4, 3, 6]);

        // Cleanup
        terminate_tx.send(()).unwrap();
        dispatcher_thread.join().unwrap();
    }
}
