//! This is the documentation for prazos-rs
//!
//! Judicial deadline (*prazo*) computation for Brazilian civil procedure: business day
//! [`calendars`] with holidays and suspension periods, and the [`deadlines`] engine that counts
//! days, rolls non-working due dates forward and records a day-by-day trace of its reasoning.


pub mod json;

pub mod calendars;

pub mod deadlines;
