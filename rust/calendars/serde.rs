use crate::calendars::{Cal, Calendar, SuspensionPeriod, UnionCal};
use crate::json::JSON;

impl JSON for Cal {}
impl JSON for UnionCal {}
impl JSON for Calendar {}
impl JSON for SuspensionPeriod {}
