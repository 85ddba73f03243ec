/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, error};
use serde::Serialize;
use std::io::{BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::Dispatcher;
use crate::shared::{CarStatus, RideRequest};

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Stop,
    Request(RideRequest),
    Status,
    Help,
    Quit,
}

/// One JSON line written back for each command.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Response {
    Assigned {
        message: String,
        #[serde(rename = "carId")]
        car_id: u32,
    },
    Message {
        message: String,
    },
    Error {
        error: String,
        message: String,
        retryable: bool,
    },
    Status(Vec<CarStatus>),
}

impl Response {
    fn message(message: &str) -> Response {
        Response::Message {
            message: message.to_string(),
        }
    }

    fn error(kind: &str, message: String) -> Response {
        Response::Error {
            error: kind.to_string(),
            message,
            retryable: false,
        }
    }
}

const HELP: &str = "commands: start | stop | request <pickup> <destination> | status | help | quit";

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        Some(word) => word.to_lowercase(),
        None => return Err("empty command".to_string()),
    };

    let parsed = match command.as_str() {
        "start" => Command::Start,
        "stop" => Command::Stop,
        "status" => Command::Status,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "request" => {
            let pickup = parse_floor(words.next(), "pickup")?;
            let destination = parse_floor(words.next(), "destination")?;
            Command::Request(RideRequest::new(pickup, destination))
        }
        other => return Err(format!("unknown command '{}'", other)),
    };

    match words.next() {
        Some(extra) => Err(format!("unexpected argument '{}'", extra)),
        None => Ok(parsed),
    }
}

/**
 * Line oriented front end for a `Dispatcher`.
 *
 * Reads one command per line and answers each with one line of JSON. Stops at `quit`, `exit` or
 * end of input.
 */
pub struct Console<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Console<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Console<'a> {
        Console { dispatcher }
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command),
                Err(e) => Response::error("parse", e),
            };

            let json = serde_json::to_string(&response)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            writeln!(output, "{}", json)?;
            output.flush()?;
        }
        Ok(())
    }

    pub fn handle(&self, command: Command) -> Response {
        debug!("Handling command {:?}", command);
        match command {
            Command::Start => match self.dispatcher.start() {
                Ok(()) => Response::message("Simulation started"),
                Err(e) => {
                    error!("Failed to start the clock thread: {}", e);
                    Response::error("internal", e.to_string())
                }
            },
            Command::Stop => {
                self.dispatcher.stop();
                Response::message("Simulation stopped")
            }
            Command::Request(request) => match self.dispatcher.request_ride(request) {
                Ok(car_id) => Response::Assigned {
                    message: "Ride assigned".to_string(),
                    car_id,
                },
                Err(e) => Response::Error {
                    error: e.kind().to_string(),
                    message: e.to_string(),
                    retryable: e.is_retryable(),
                },
            },
            Command::Status => Response::Status(self.dispatcher.status()),
            Command::Help => Response::message(HELP),
            Command::Quit => Response::message("Bye"),
        }
    }
}

/***************************************/
/*          Private functions          */
/***************************************/
fn parse_floor(word: Option<&str>, name: &str) -> Result<i32, String> {
    match word {
        Some(word) => word
            .parse::<i32>()
            .map_err(|_| format!("{} floor '{}' is not a number", name, word)),
        None => Err(format!("missing {} floor", name)),
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
