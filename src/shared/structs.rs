/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Idle,
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Idle => write!(f, "idle"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideRequest {
    #[serde(rename = "pickupFloor")]
    pub pickup_floor: i32,
    #[serde(rename = "destinationFloor")]
    pub destination_floor: i32,
}

impl RideRequest {
    pub fn new(pickup_floor: i32, destination_floor: i32) -> RideRequest {
        RideRequest {
            pickup_floor,
            destination_floor,
        }
    }
}

/**
 * Point-in-time copy of one car, as handed out by `Dispatcher::status`.
 *
 * `stops` is an owned copy of the car's stop queue in service order, so nothing done to a
 * `CarStatus` can reach back into the simulation.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarStatus {
    pub id: u32,
    #[serde(rename = "currentFloor")]
    pub current_floor: i32,
    pub direction: Direction,
    pub stops: Vec<i32>,
    #[serde(rename = "moveSecondsRemaining")]
    pub move_seconds_remaining: u32,
    #[serde(rename = "waitSecondsRemaining")]
    pub wait_seconds_remaining: u32,
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car {} | floor={}, direction={}, stops={:?}, move={}, wait={}",
            self.id,
            self.current_floor,
            self.direction,
            self.stops,
            self.move_seconds_remaining,
            self.wait_seconds_remaining
        )
    }
}
