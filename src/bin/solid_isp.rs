// Interface segregation: storage devices, documents, athletes

use std::process::ExitCode;

use solid_patterns::{run_driver, Principle};

fn main() -> ExitCode {
    run_driver(&[Principle::Segregation])
}
