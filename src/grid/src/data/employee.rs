//! See [`Employee`]

use super::{TenantId, id_type};
use serde::{Deserialize, Serialize};

id_type!(
    /// Code uniquely identifying an employee
    EmployeeId(u64) as "e"
);

/// A person who can be assigned to a shift.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique within the tenant.
    pub id: EmployeeId,

    /// Tenant the employee belongs to.
    pub tenant_id: TenantId,

    /// Display name for the manager-facing grid.
    /// Can be changed without changing the employee's ID.
    pub name: String,
}
