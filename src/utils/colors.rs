/// ANSI color helper utilities for terminal output.
use crate::models::Validation;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Valid → green, Left early → yellow, Joined late → red.
pub fn color_for_validation(v: Validation) -> &'static str {
    match v {
        Validation::Valid => GREEN,
        Validation::LeftEarly => YELLOW,
        Validation::JoinedLate => RED,
    }
}

/// Zero attendance is greyed out.
pub fn color_for_minutes(minutes: f64) -> &'static str {
    if minutes > 0.0 { RESET } else { GREY }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
