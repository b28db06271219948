//! Shared report fixtures for the formatter tests.

use std::path::PathBuf;

use crate::checker::{FileReport, Position, Violation, ViolationKind};

pub fn sample_reports() -> Vec<FileReport> {
    vec![
        FileReport {
            path: PathBuf::from("src/ok.cpp"),
            violations: Vec::new(),
        },
        FileReport {
            path: PathBuf::from("src/bad.cpp"),
            violations: vec![
                Violation::bracket('(', Position::new(1, 1), ViolationKind::UnmatchedOpening),
                Violation::bracket(')', Position::new(1, 3), ViolationKind::WrongClosing),
                Violation::policy(Position::new(2, 81), ViolationKind::LineTooLong),
            ],
        },
    ]
}
