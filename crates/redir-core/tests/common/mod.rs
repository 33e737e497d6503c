//! Shared helpers for redirect integration tests.

#![allow(dead_code)]

use std::cell::Cell;

use redir_core::{
    Diagnostics, Navigation, RedirectError, RedirectOptions, RedirectResolver, StaticLocation,
};

pub const ORIGIN: &str = "https://app.example";

/// Counts every error handed to the diagnostics sink.
#[derive(Default)]
pub struct CountingDiagnostics {
    pub count: Cell<usize>,
}

impl Diagnostics for CountingDiagnostics {
    fn log_error(&self, _error: &RedirectError) {
        self.count.set(self.count.get() + 1);
    }
}

/// Runs one redirect from `{ORIGIN}/signin{search}` and returns the single
/// navigation plus the number of errors logged.
pub fn navigate(search: &str, param: &str, options: &RedirectOptions) -> (Navigation, usize) {
    let diagnostics = CountingDiagnostics::default();
    let mut location = StaticLocation::with_origin(&format!("{ORIGIN}/signin{search}"), ORIGIN);
    RedirectResolver::new(&diagnostics).redirect(&mut location, param, options);
    assert_eq!(location.navigations().len(), 1, "exactly one navigation");
    let nav = location.navigations()[0].clone();
    (nav, diagnostics.count.get())
}
