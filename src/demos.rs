//! The demonstration drivers behind the binaries.
//!
//! Each [`Principle`] builds concrete variants from a [`DemoConfig`], hands
//! them to consumers through their traits, and prints what happened. The
//! first error stops the run.

use std::process::ExitCode;

use colored::Colorize;
use log::{error, info};

use crate::config::DemoConfig;
use crate::console::{Console, Stdout};
use crate::error::Result;
use crate::inversion::{Application, ConsolePrinter, UserController, UserDirectory, WebService, GREETING};
use crate::logging::init_logging;
use crate::open_closed::{
    total_area, Circle, EmailNotifier, NotificationService, PayPal, PaymentProcessor, Rectangle, Sberbank,
    Shape, SmsNotifier,
};
use crate::segregation::{
    copy_document, print_documents, read_all, sprint, training_session, write_all, AllRounder, Hdd,
    OfficeDevice, Readable, SimpleRunner, SimpleWriter, Ssd, Writable,
};
use crate::single_responsibility::{
    ByteStore, ConsoleUserStore, ConsoleWriter, FileManager, FileWriter, FsStore, Logger, UserRegistration,
};
use crate::substitution::{print_area, total_cost, Cat, Dog, Ship, Truck, Vehicle, Zoo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    Substitution,
    Segregation,
    Inversion,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::Substitution,
        Principle::Segregation,
        Principle::Inversion,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single responsibility",
            Principle::OpenClosed => "Open/closed",
            Principle::Substitution => "Liskov substitution",
            Principle::Segregation => "Interface segregation",
            Principle::Inversion => "Dependency inversion",
        }
    }

    pub fn run<C>(&self, config: &DemoConfig, console: &C, store: &dyn ByteStore) -> Result<()>
    where
        C: Console + Clone + 'static,
    {
        info!("running {} demo", self.title());
        match self {
            Principle::SingleResponsibility => single_responsibility(config, console, store),
            Principle::OpenClosed => open_closed(config, console),
            Principle::Substitution => {
                substitution(config, console);
                Ok(())
            }
            Principle::Segregation => {
                segregation(config, console);
                Ok(())
            }
            Principle::Inversion => inversion(config, console),
        }
    }
}

fn single_responsibility<C>(config: &DemoConfig, console: &C, store: &dyn ByteStore) -> Result<()>
where
    C: Console + Clone + 'static,
{
    let logger = Logger;
    logger.write_log(
        &ConsoleWriter::with_console(console.clone()),
        "Sample message for the console",
    );
    logger.write_log(
        &FileWriter::with_console(config.logging.file_name.as_str(), console.clone()),
        "Sample message for the file",
    );

    let files = FileManager::with_store(store);
    files.write_file(&config.files.output, config.files.payload.as_bytes())?;
    console.print_line("Data written to file successfully.");
    let data = files.read_file(&config.files.output)?;
    console.print_line(&format!("Data read from file: {}", String::from_utf8_lossy(&data)));

    let registration = UserRegistration::new(ConsoleUserStore::with_console(console.clone()));
    registration.register(&config.user.name, &config.user.email)?;
    Ok(())
}

fn open_closed<C>(config: &DemoConfig, console: &C) -> Result<()>
where
    C: Console + Clone + 'static,
{
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle {
            radius: config.shapes.circle_radius,
        }),
        Box::new(Rectangle {
            width: config.shapes.rectangle_width,
            height: config.shapes.rectangle_height,
        }),
    ];
    console.print_line(&format!("Total area of all shapes: {}", total_area(&shapes)));

    PaymentProcessor::new(Box::new(Sberbank::with_console(console.clone())))
        .process_payment(config.payments.sberbank_amount)?;
    PaymentProcessor::new(Box::new(PayPal::with_console(console.clone())))
        .process_payment(config.payments.paypal_amount)?;

    let service = NotificationService::new(vec![
        Box::new(EmailNotifier::with_console(console.clone())),
        Box::new(SmsNotifier::with_console(console.clone())),
    ]);
    let report = service.send_notification(&config.notifications.message);
    console.print_line(&format!(
        "Notifications delivered: {}/{}",
        report.delivered,
        report.attempted()
    ));
    if let Some(err) = report.failures.into_iter().next() {
        return Err(err);
    }
    Ok(())
}

fn substitution<C>(config: &DemoConfig, console: &C)
where
    C: Console + Clone + 'static,
{
    print_area(
        &Rectangle {
            width: config.shapes.rectangle_width,
            height: config.shapes.rectangle_height,
        },
        console,
    );
    print_area(
        &Circle {
            radius: config.shapes.circle_radius,
        },
        console,
    );

    Zoo::new(vec![Box::new(Dog), Box::new(Cat)]).make_noise(console);

    let fleet: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Truck {
            weight: config.freight.truck_weight,
        }),
        Box::new(Ship {
            containers: config.freight.ship_containers,
        }),
    ];
    console.print_line(&format!("Total shipping cost: ${:.2}", total_cost(&fleet)));
}

fn segregation<C>(config: &DemoConfig, console: &C)
where
    C: Console + Clone + 'static,
{
    let hdd = Hdd::with_console(console.clone());
    let ssd = Ssd::with_console(console.clone());

    let readable: [&dyn Readable; 2] = [&hdd, &ssd];
    for contents in read_all(&readable) {
        console.print_line(&contents);
    }
    let writable: [&dyn Writable; 2] = [&hdd, &ssd];
    write_all(&writable, &config.storage.payload);

    print_documents(&SimpleWriter::with_console(console.clone()), &["report"]);
    copy_document(&OfficeDevice::with_console(console.clone()), "contract");

    sprint(&SimpleRunner::with_console(console.clone()), "100m");
    training_session(&AllRounder::with_console(console.clone()), "1km", "5km");
}

fn inversion<C>(config: &DemoConfig, console: &C) -> Result<()>
where
    C: Console + Clone + 'static,
{
    WebService::new(Box::new(EmailNotifier::with_console(console.clone()))).handle_request()?;

    let controller = UserController::new(Box::new(UserDirectory));
    console.print_line(&controller.get_user(config.controller.user_id));

    Application::new(Box::new(ConsolePrinter::with_console(console.clone()))).send_message(GREETING);
    Ok(())
}

/// Loads the embedded configuration, starts logging and runs `principles` in
/// order against stdout and the real filesystem.
pub fn run_driver(principles: &[Principle]) -> ExitCode {
    let config = match DemoConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.logging.level) {
        eprintln!("{} {err}", "error:".red().bold());
        return ExitCode::FAILURE;
    }

    for principle in principles {
        println!("\n{}", format!("=== {} ===", principle.title()).bold().cyan());
        if let Err(err) = principle.run(&config, &Stdout, &FsStore) {
            error!("{} demo stopped: {err}", principle.title());
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "✓ Demonstration complete".green());
    ExitCode::SUCCESS
}
