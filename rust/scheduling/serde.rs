use crate::json::JSON;
use crate::scheduling::{Cal, DateRange, StandardCalendar};

impl JSON for Cal {}
impl JSON for DateRange {}
impl JSON for StandardCalendar {}
