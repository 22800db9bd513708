// Liskov substitution: area printing, zoo, freight

use std::process::ExitCode;

use solid_patterns::{run_driver, Principle};

fn main() -> ExitCode {
    run_driver(&[Principle::Substitution])
}
