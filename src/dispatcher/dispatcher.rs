/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, error, info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::clock::Clock;
use crate::config::SimulationConfig;
use crate::elevator::Car;
use crate::shared::{CarStatus, FloorIssue, RideError, RideRequest, ValidationError};

/**
 * Owns every car and serialises all access to them.
 *
 * A single mutex guards the car set. The clock's tick pass, ride assignment and status snapshots
 * each hold it for their whole critical section, so they alternate and never interleave. The
 * car set is created once and never resized. Stopping the clock keeps every car as it is.
 *
 * # Fields
 * - `cars`:            The cars in creation order, shared with the clock thread.
 * - `clock`:           The running clock, `None` while stopped. Doubles as the run flag.
 * - `tick_interval`:   Real time between two tick passes.
 * - `n_floors`:        Highest valid floor. Floors are numbered from 1.
 */
pub struct Dispatcher {
    cars: Arc<Mutex<Vec<Car>>>,
    clock: Mutex<Option<Clock>>,
    tick_interval: Duration,
    n_floors: i32,
}

impl Dispatcher {
    pub fn new(config: &SimulationConfig) -> Dispatcher {
        let cars = (1..=config.n_cars)
            .map(|id| {
                let car = Car::new(id, config);
                info!("Elevator {} created at floor {}", car.id(), car.current_floor());
                car
            })
            .collect::<Vec<Car>>();

        Dispatcher {
            cars: Arc::new(Mutex::new(cars)),
            clock: Mutex::new(None),
            tick_interval: config.tick_interval(),
            n_floors: config.n_floors,
        }
    }

    /// Starts the clock. Starting a running simulation does nothing.
    pub fn start(&self) -> std::io::Result<()> {
        let mut clock = lock(&self.clock);
        if clock.is_some() {
            warn!("Simulation already running. Ignoring start.");
            return Ok(());
        }

        info!("Starting elevator simulation with {} elevators", self.car_count());
        let cars = self.cars.clone();
        *clock = Some(Clock::start(self.tick_interval, move || tick_pass(&cars))?);
        Ok(())
    }

    /// Stops the clock and waits for any tick pass in flight. Stopping twice does nothing.
    pub fn stop(&self) {
        let mut clock = lock(&self.clock);
        match clock.take() {
            Some(mut running) => {
                info!("Stopping elevator simulation...");
                running.stop();
            }
            None => warn!("Stop called but simulation is not running."),
        }
    }

    pub fn is_running(&self) -> bool {
        lock(&self.clock).is_some()
    }

    pub fn car_count(&self) -> usize {
        lock(&self.cars).len()
    }

    pub fn n_floors(&self) -> i32 {
        self.n_floors
    }

    /**
     * Assigns a ride to the nearest idle car and returns that car's id.
     *
     * Only cars with no queued work are considered. Among equally distant idle cars the one
     * created first wins. The car gets the pickup floor queued before the destination floor.
     * On any error no car is touched.
     */
    pub fn request_ride(&self, request: RideRequest) -> Result<u32, RideError> {
        info!(
            "New ride request: pickup={}, destination={}",
            request.pickup_floor, request.destination_floor
        );

        if !self.is_running() {
            error!("Ride request rejected: simulation not started.");
            return Err(RideError::NotRunning);
        }

        self.validate(&request)?;

        let mut cars = lock(&self.cars);
        let car = match cars
            .iter_mut()
            .filter(|car| car.is_idle())
            .min_by_key(|car| car.current_floor().abs_diff(request.pickup_floor))
        {
            Some(car) => car,
            None => {
                warn!(
                    "All elevators busy. Cannot assign ride pickup={}, destination={}",
                    request.pickup_floor, request.destination_floor
                );
                return Err(RideError::CarBusy);
            }
        };

        info!(
            "Assigning elevator {} to pickup={}, then destination={}",
            car.id(),
            request.pickup_floor,
            request.destination_floor
        );

        car.assign(request.pickup_floor);
        debug!("Elevator {} assigned pickup={}", car.id(), request.pickup_floor);

        car.assign(request.destination_floor);
        debug!("Elevator {} assigned destination={}", car.id(), request.destination_floor);

        Ok(car.id())
    }

    /// Independent copies of every car's state, in creation order.
    pub fn status(&self) -> Vec<CarStatus> {
        let cars = lock(&self.cars);
        cars.iter()
            .map(|car| {
                let status = car.status();
                debug!("Status: {}", status);
                status
            })
            .collect()
    }

    /// Runs a single tick pass right now, independent of the clock.
    pub fn tick(&self) {
        tick_pass(&self.cars);
    }

    fn validate(&self, request: &RideRequest) -> Result<(), ValidationError> {
        let in_range = |floor: i32| (1..=self.n_floors).contains(&floor);
        let mut issues = Vec::new();

        if !in_range(request.pickup_floor) {
            issues.push(FloorIssue::PickupOutOfRange(request.pickup_floor));
        }
        if !in_range(request.destination_floor) {
            issues.push(FloorIssue::DestinationOutOfRange(request.destination_floor));
        }
        if issues.is_empty() && request.pickup_floor == request.destination_floor {
            issues.push(FloorIssue::SameFloor(request.pickup_floor));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            warn!("Ride request rejected: {:?}", issues);
            Err(ValidationError {
                n_floors: self.n_floors,
                issues,
            })
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        info!("Disposing elevator simulation...");
        let clock = self.clock.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(mut running) = clock.take() {
            running.stop();
        }
    }
}

/***************************************/
/*          Private functions          */
/***************************************/
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn tick_pass(cars: &Mutex<Vec<Car>>) {
    let mut cars = lock(cars);
    for car in cars.iter_mut() {
        let before = car.status();
        car.tick();
        debug!(
            "Tick: elevator {} | floor {}->{}, direction {}->{}, move {}->{}, wait {}->{}, stops={:?}",
            car.id(),
            before.current_floor,
            car.current_floor(),
            before.direction,
            car.direction(),
            before.move_seconds_remaining,
            car.move_seconds_remaining(),
            before.wait_seconds_remaining,
            car.wait_seconds_remaining(),
            car.stops()
        );
    }
}
