use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validate::{required_number, required_object, required_text};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct REmployeeBody {
    pub employee: Option<REmployee>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct REmployee {
    pub name: Option<String>,
    pub position: Option<String>,
    pub wage: Option<i64>,
}

/// A validated employee payload, ready for insert or full update.
#[derive(Debug, Clone)]
pub struct DBEmployeeWrite {
    pub name: String,
    pub position: String,
    pub wage: i64,
}

impl REmployeeBody {
    pub fn validate(self) -> Result<DBEmployeeWrite, AppError> {
        let employee = required_object("employee", self.employee)?;
        Ok(DBEmployeeWrite {
            name: required_text("name", employee.name)?,
            position: required_text("position", employee.position)?,
            wage: required_number("wage", employee.wage)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeeRes {
    pub employee: entity::employee::Model,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeesRes {
    pub employees: Vec<entity::employee::Model>,
}
