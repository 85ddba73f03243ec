/*
 * Unit tests for the car state machine
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_car_init
 * - test_car_move_up
 * - test_car_move_down
 * - test_car_assign_current_floor
 * - test_car_assign_duplicate
 * - test_car_dwell_before_departure
 * - test_car_next_leg_visible_while_dwelling
 * - test_car_idle_tick
 * - test_car_status_is_a_copy
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod car_tests {
    use crate::config::SimulationConfig;
    use crate::elevator::Car;
    use crate::shared::Direction::{Down, Idle, Up};

    fn setup_car() -> Car {
        Car::new(1, &SimulationConfig::default())
    }

    fn run_ticks(car: &mut Car, n: u32) {
        for _ in 0..n {
            car.tick();
        }
    }

    #[test]
    fn test_car_init() {
        // Purpose: Verify that a new car starts idle at floor 1 with nothing queued

        // Act
        let car = setup_car();

        // Assert
        assert_eq!(car.id(), 1);
        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.direction(), Idle);
        assert!(car.stops().is_empty());
        assert_eq!(car.move_seconds_remaining(), 0);
        assert_eq!(car.wait_seconds_remaining(), 0);
    }

    #[test]
    fn test_car_move_up() {
        // Purpose: Verify that an idle car reaches a floor above after 10 ticks per floor

        // Arrange
        let mut car = setup_car();

        // Act
        car.assign(5);

        // Assert
        assert_eq!(car.direction(), Up);
        assert_eq!(car.move_seconds_remaining(), 40);

        run_ticks(&mut car, 39);
        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.move_seconds_remaining(), 1);

        car.tick();
        assert_eq!(car.current_floor(), 5);
        assert_eq!(car.direction(), Idle);
        assert_eq!(car.wait_seconds_remaining(), 10);
        assert_eq!(car.move_seconds_remaining(), 0);
        assert!(car.stops().is_empty());
    }

    #[test]
    fn test_car_move_down() {
        // Purpose: Verify that the move time is symmetric when travelling down

        // Arrange
        let mut car = setup_car();
        car.assign(6);
        run_ticks(&mut car, 50 + 10);
        assert_eq!(car.current_floor(), 6);
        assert_eq!(car.wait_seconds_remaining(), 0);

        // Act
        car.assign(2);

        // Assert
        assert_eq!(car.direction(), Down);
        assert_eq!(car.move_seconds_remaining(), 40);
        run_ticks(&mut car, 40);
        assert_eq!(car.current_floor(), 2);
        assert_eq!(car.direction(), Idle);
        assert_eq!(car.wait_seconds_remaining(), 10);
    }

    #[test]
    fn test_car_assign_current_floor() {
        // Purpose: Verify that assigning the current floor opens the doors without any move tick

        // Arrange
        let mut car = setup_car();

        // Act
        car.assign(1);

        // Assert
        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.direction(), Idle);
        assert_eq!(car.move_seconds_remaining(), 0);
        assert_eq!(car.wait_seconds_remaining(), 10);
        assert!(car.stops().is_empty());
    }

    #[test]
    fn test_car_assign_duplicate() {
        // Purpose: Verify that a floor already queued is not queued twice

        // Arrange
        let mut car = setup_car();
        car.assign(4);
        car.assign(7);

        // Act
        car.assign(4);
        car.assign(7);

        // Assert
        assert_eq!(car.stops().len(), 2);
        assert_eq!(car.stops().iter().copied().collect::<Vec<i32>>(), vec![4, 7]);
    }

    #[test]
    fn test_car_dwell_before_departure() {
        // Purpose: Verify that a car holds its doors open before starting a new leg

        // Arrange
        let mut car = setup_car();
        car.assign(1);

        // Act
        car.assign(3);

        // Assert
        assert_eq!(car.direction(), Up);
        assert_eq!(car.move_seconds_remaining(), 20);
        assert_eq!(car.wait_seconds_remaining(), 10);

        run_ticks(&mut car, 10);
        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.wait_seconds_remaining(), 0);
        assert_eq!(car.move_seconds_remaining(), 20);

        run_ticks(&mut car, 20);
        assert_eq!(car.current_floor(), 3);
        assert_eq!(car.wait_seconds_remaining(), 10);
    }

    #[test]
    fn test_car_next_leg_visible_while_dwelling() {
        // Purpose: Verify that the next leg is armed on arrival while the doors are still open

        // Arrange
        let mut car = setup_car();
        car.assign(3);
        car.assign(2);

        // Act
        run_ticks(&mut car, 20);

        // Assert
        assert_eq!(car.current_floor(), 3);
        assert_eq!(car.wait_seconds_remaining(), 10);
        assert_eq!(car.direction(), Down);
        assert_eq!(car.move_seconds_remaining(), 10);
        assert_eq!(car.stops().iter().copied().collect::<Vec<i32>>(), vec![2]);

        run_ticks(&mut car, 10);
        assert_eq!(car.current_floor(), 3);
        assert_eq!(car.move_seconds_remaining(), 10);

        run_ticks(&mut car, 10);
        assert_eq!(car.current_floor(), 2);
        assert_eq!(car.direction(), Idle);
        assert!(car.stops().is_empty());
    }

    #[test]
    fn test_car_idle_tick() {
        // Purpose: Verify that ticking an idle car changes nothing

        // Arrange
        let mut car = setup_car();
        let before = car.status();

        // Act
        run_ticks(&mut car, 25);

        // Assert
        assert_eq!(car.status(), before);
    }

    #[test]
    fn test_car_status_is_a_copy() {
        // Purpose: Verify that mutating a snapshot never reaches the car

        // Arrange
        let mut car = setup_car();
        car.assign(8);
        let mut status = car.status();

        // Act
        status.stops.push(3);
        status.stops.clear();
        status.current_floor = 9;

        // Assert
        assert_eq!(car.stops().iter().copied().collect::<Vec<i32>>(), vec![8]);
        assert_eq!(car.current_floor(), 1);
    }
}
