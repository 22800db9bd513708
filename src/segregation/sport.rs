use crate::console::{Console, Stdout};

pub trait Runner {
    fn run(&self, distance: &str);
}

pub trait Walker {
    fn walk(&self, distance: &str);
}

pub trait MultiSportsman: Runner + Walker {}

impl<T: Runner + Walker + ?Sized> MultiSportsman for T {}

#[derive(Debug, Default, Clone)]
pub struct SimpleRunner<C = Stdout> {
    console: C,
}

impl SimpleRunner {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> SimpleRunner<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Runner for SimpleRunner<C> {
    fn run(&self, distance: &str) {
        self.console
            .print_line(&format!("SimpleRunner ran {distance}"));
    }
}

#[derive(Debug, Default, Clone)]
pub struct AllRounder<C = Stdout> {
    console: C,
}

impl AllRounder {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> AllRounder<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Runner for AllRounder<C> {
    fn run(&self, distance: &str) {
        self.console.print_line(&format!("AllRounder ran {distance}"));
    }
}

impl<C: Console> Walker for AllRounder<C> {
    fn walk(&self, distance: &str) {
        self.console
            .print_line(&format!("AllRounder walked {distance}"));
    }
}

pub fn sprint(runner: &dyn Runner, distance: &str) {
    runner.run(distance);
}

/// Warm-up walk, then the run.
pub fn training_session(athlete: &dyn MultiSportsman, warm_up: &str, distance: &str) {
    athlete.walk(warm_up);
    athlete.run(distance);
}
