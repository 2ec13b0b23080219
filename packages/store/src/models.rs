//! # Domain models shared by the client crates
//!
//! These types mirror the JSON the TimeWise backend sends and accepts. They are
//! `Serialize + Deserialize` so the `api` crate can decode responses straight
//! into them, and `PartialEq` so Dioxus components can take them as props.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserProfile`] | The signed-in user, as returned by `/api/auth/me`. |
//! | [`EmployeePayroll`] | One employee row of the payroll listing. Every field is optional. |
//! | [`PayrollRowView`] | An [`EmployeePayroll`] with defaults applied, ready to render. |
//! | [`ClockAction`] / [`PunchRequest`] / [`ClockPunch`] | Kiosk clock-in and clock-out. |

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub organization_id: String,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserProfile {
    /// Display name, falling back to the email when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Payroll record of a single employee. The backend may omit any field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayroll {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub gross_pay: Option<f64>,
}

/// Name shown for an employee record without one.
pub const DEFAULT_EMPLOYEE_NAME: &str = "Employee";

/// What a payroll table row displays.
#[derive(Clone, Debug, PartialEq)]
pub struct PayrollRowView {
    pub name: String,
    pub hours: f64,
    pub gross_pay: f64,
}

impl From<&EmployeePayroll> for PayrollRowView {
    fn from(record: &EmployeePayroll) -> Self {
        Self {
            name: record
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_EMPLOYEE_NAME.to_string()),
            hours: record.hours.unwrap_or(0.0),
            gross_pay: record.gross_pay.unwrap_or(0.0),
        }
    }
}

/// Kiosk punch direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockAction {
    ClockIn,
    ClockOut,
}

impl ClockAction {
    pub fn label(self) -> &'static str {
        match self {
            ClockAction::ClockIn => "Clock in",
            ClockAction::ClockOut => "Clock out",
        }
    }
}

/// Body of a kiosk punch request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchRequest {
    pub employee_id: String,
    pub action: ClockAction,
}

/// A recorded punch, as confirmed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockPunch {
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub action: ClockAction,
    /// RFC 3339 timestamp assigned by the server.
    pub recorded_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_row_defaults() {
        let record: EmployeePayroll = serde_json::from_str("{}").unwrap();
        let row = PayrollRowView::from(&record);
        assert_eq!(row.name, "Employee");
        assert_eq!(row.hours, 0.0);
        assert_eq!(row.gross_pay, 0.0);
        assert_eq!(format!("{}", row.hours), "0");
        assert_eq!(format!("{}", row.gross_pay), "0");
    }

    #[test]
    fn test_payroll_row_verbatim() {
        let record: EmployeePayroll =
            serde_json::from_str(r#"{"name":"Jane","hours":40,"grossPay":1200}"#).unwrap();
        let row = PayrollRowView::from(&record);
        assert_eq!(row.name, "Jane");
        assert_eq!(format!("{}", row.hours), "40");
        assert_eq!(format!("{}", row.gross_pay), "1200");
    }

    #[test]
    fn test_user_profile_json() {
        let json = r#"{"id":"u1","name":"Ada","email":"ada@example.com","organizationId":"org-7","role":"MANAGER"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.organization_id, "org-7");
        assert_eq!(user.role, Some(Role::Manager));
        assert_eq!(user.display_name(), "Ada");

        let json = r#"{"id":"u2","name":" ","email":"bob@example.com","organizationId":"org-7"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert!(user.role.is_none());
        assert_eq!(user.display_name(), "bob@example.com");
    }

    #[test]
    fn test_punch_request_wire_format() {
        let body = PunchRequest {
            employee_id: "E-42".to_string(),
            action: ClockAction::ClockOut,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"employeeId":"E-42","action":"CLOCK_OUT"}"#
        );
    }
}
