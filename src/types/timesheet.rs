use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validate::{required_number, required_object};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RTimesheetBody {
    pub timesheet: Option<RTimesheet>,
}

/// `employee_id` is never read from the body, the path decides the owner.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RTimesheet {
    pub hours: Option<i64>,
    pub rate: Option<i64>,
    pub date: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct DBTimesheetWrite {
    pub hours: i64,
    pub rate: i64,
    pub date: i64,
}

impl RTimesheetBody {
    pub fn validate(self) -> Result<DBTimesheetWrite, AppError> {
        let timesheet = required_object("timesheet", self.timesheet)?;
        Ok(DBTimesheetWrite {
            hours: required_number("hours", timesheet.hours)?,
            rate: required_number("rate", timesheet.rate)?,
            date: required_number("date", timesheet.date)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TimesheetRes {
    pub timesheet: entity::timesheet::Model,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TimesheetsRes {
    pub timesheets: Vec<entity::timesheet::Model>,
}
