// Dependency inversion: web service, user controller, application

use std::process::ExitCode;

use solid_patterns::{run_driver, Principle};

fn main() -> ExitCode {
    run_driver(&[Principle::Inversion])
}
