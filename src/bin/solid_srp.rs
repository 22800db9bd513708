// Single responsibility: log writers, file manager, user registration

use std::process::ExitCode;

use solid_patterns::{run_driver, Principle};

fn main() -> ExitCode {
    run_driver(&[Principle::SingleResponsibility])
}
