/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a setup `Result`, or logs the error under `$what` and exits the process.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $what:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $what, e);
                std::process::exit(1);
            }
        }
    };
}
