/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::shared::{CarStatus, Direction};

/**
 * One simulated elevator car.
 *
 * A car is always in exactly one of three behaviours: idle (nothing to do), moving (counting down
 * `move_seconds_remaining` towards the head of `stops`) or dwelling (doors open, counting down
 * `wait_seconds_remaining`). Dwelling takes priority over moving, so `direction` and
 * `move_seconds_remaining` may already describe the next leg while the doors are still open.
 *
 * # Fields
 * - `id`:                      Stable id, 1..=N in creation order.
 * - `current_floor`:           The floor the car is at, or last left.
 * - `direction`:               Direction of the current or upcoming leg, `Idle` when nothing is queued.
 * - `stops`:                   Floors still to visit, served in insertion order, never duplicated.
 * - `move_seconds_remaining`:  Ticks left before reaching the head of `stops`.
 * - `wait_seconds_remaining`:  Ticks left before the doors close.
 * - `move_time_per_floor`:     Ticks needed to travel one floor.
 * - `door_dwell_time`:         Ticks the doors stay open on arrival.
 */
#[derive(Debug, Clone)]
pub struct Car {
    id: u32,
    current_floor: i32,
    direction: Direction,
    stops: VecDeque<i32>,
    move_seconds_remaining: u32,
    wait_seconds_remaining: u32,
    move_time_per_floor: u32,
    door_dwell_time: u32,
}

impl Car {
    pub fn new(id: u32, config: &SimulationConfig) -> Car {
        Car {
            id,
            current_floor: 1,
            direction: Direction::Idle,
            stops: VecDeque::new(),
            move_seconds_remaining: 0,
            wait_seconds_remaining: 0,
            move_time_per_floor: config.move_time_per_floor,
            door_dwell_time: config.door_dwell_time,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    pub fn stops(&self) -> &VecDeque<i32> {
        &self.stops
    }

    pub fn move_seconds_remaining(&self) -> u32 {
        self.move_seconds_remaining
    }

    pub fn wait_seconds_remaining(&self) -> u32 {
        self.wait_seconds_remaining
    }

    /// Queues `floor` unless it is already queued. An idle car commits to it right away.
    pub fn assign(&mut self, floor: i32) {
        if self.stops.contains(&floor) {
            return;
        }

        self.stops.push_back(floor);

        if self.direction == Direction::Idle {
            self.set_next_target();
        }
    }

    /// Advances the car by one simulated second.
    pub fn tick(&mut self) {
        // Doors open
        if self.wait_seconds_remaining > 0 {
            self.wait_seconds_remaining -= 1;
            if self.wait_seconds_remaining == 0 {
                self.set_next_target();
            }
            return;
        }

        if self.move_seconds_remaining == 0 {
            return;
        }

        self.move_seconds_remaining -= 1;
        if self.move_seconds_remaining == 0 {
            self.arrive();
        }
    }

    pub fn status(&self) -> CarStatus {
        CarStatus {
            id: self.id,
            current_floor: self.current_floor,
            direction: self.direction,
            stops: self.stops.iter().copied().collect(),
            move_seconds_remaining: self.move_seconds_remaining,
            wait_seconds_remaining: self.wait_seconds_remaining,
        }
    }

    fn set_next_target(&mut self) {
        let target = match self.stops.front() {
            Some(&target) => target,
            None => {
                self.direction = Direction::Idle;
                return;
            }
        };

        if target > self.current_floor {
            self.direction = Direction::Up;
            self.move_seconds_remaining = self.travel_time(target);
        } else if target < self.current_floor {
            self.direction = Direction::Down;
            self.move_seconds_remaining = self.travel_time(target);
        } else {
            self.arrive();
        }
    }

    fn arrive(&mut self) {
        let floor = match self.stops.pop_front() {
            Some(floor) => floor,
            None => return,
        };
        self.current_floor = floor;
        self.move_seconds_remaining = 0;
        self.wait_seconds_remaining = self.door_dwell_time;

        // Stops are unique, so the next head is never this floor again
        if self.stops.is_empty() {
            self.direction = Direction::Idle;
        } else {
            self.set_next_target();
        }
    }

    fn travel_time(&self, target: i32) -> u32 {
        self.move_time_per_floor * self.current_floor.abs_diff(target)
    }
}
