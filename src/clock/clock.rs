/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::thread::{Builder, JoinHandle};
use std::time::Duration;

/**
 * Periodic driver for the simulation.
 *
 * `start` runs one tick pass on the calling thread, then spawns a named background thread that
 * runs a pass every `interval` until told to terminate. `stop` signals the thread and joins it,
 * so once it returns no further pass can run.
 *
 * # Fields
 * - `terminate_tx`:    Tells the clock thread to leave its loop.
 * - `handle`:          Join handle of the clock thread, taken by `stop`.
 */
pub struct Clock {
    terminate_tx: cbc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    pub fn start<F>(interval: Duration, mut on_tick: F) -> std::io::Result<Clock>
    where
        F: FnMut() + Send + 'static,
    {
        on_tick();

        let (terminate_tx, terminate_rx) = cbc::bounded::<()>(1);
        let handle = Builder::new().name("clock".into()).spawn(move || {
            let ticker = cbc::tick(interval);
            loop {
                cbc::select! {
                    recv(terminate_rx) -> _ => break,
                    recv(ticker) -> _ => on_tick(),
                }
            }
            log::debug!("Clock thread terminated");
        })?;

        Ok(Clock {
            terminate_tx,
            handle: Some(handle),
        })
    }

    /// Blocks until the clock thread has finished its current pass and exited.
    pub fn stop(&mut self) {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => return,
        };

        // The receiver only disappears if the thread already exited
        let _ = self.terminate_tx.send(());
        if handle.join().is_err() {
            log::error!("Clock thread panicked during a tick pass");
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod clock_tests {
    use super::Clock;
    use crossbeam_channel::unbounded;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_clock_first_pass_is_immediate() {
        // Purpose: Verify that a pass has run by the time start returns

        // Arrange
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        // Act
        let mut clock = Clock::start(Duration::from_secs(3600), move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        // Assert
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Cleanup
        clock.stop();
    }

    #[test]
    fn test_clock_ticks_periodically() {
        // Purpose: Verify that passes keep coming at the configured interval

        // Arrange
        let (tick_tx, tick_rx) = unbounded::<()>();

        // Act
        let mut clock = Clock::start(Duration::from_millis(10), move || {
            let _ = tick_tx.send(());
        })
        .unwrap();

        // Assert
        for _ in 0..4 {
            match tick_rx.recv_timeout(Duration::from_secs(3)) {
                Ok(()) => {}
                Err(e) => panic!("Timed out waiting for clock tick: {:?}", e),
            }
        }

        // Cleanup
        clock.stop();
    }

    #[test]
    fn test_clock_no_tick_after_stop() {
        // Purpose: Verify that no pass runs once stop has returned

        // Arrange
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let mut clock = Clock::start(Duration::from_millis(2), move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        sleep(Duration::from_millis(20));

        // Act
        clock.stop();
        let after_stop = count.load(Ordering::SeqCst);
        sleep(Duration::from_millis(30));

        // Assert
        assert!(after_stop >= 1);
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_clock_stop_twice() {
        // Purpose: Verify that stopping a stopped clock is harmless

        // Arrange
        let mut clock = Clock::start(Duration::from_millis(5), || {}).unwrap();

        // Act
        clock.stop();
        clock.stop();
        drop(clock);
    }
}
