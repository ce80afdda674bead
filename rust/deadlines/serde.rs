use crate::deadlines::{DeadlineOptions, DeadlineRequest, DeadlineResult, TimelinessReport};
use crate::json::JSON;

impl JSON for DeadlineRequest {}
impl JSON for DeadlineResult {}
impl JSON for DeadlineOptions {}
impl JSON for TimelinessReport {}
