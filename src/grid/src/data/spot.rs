//! See [`Spot`]

use super::{TenantId, id_type};
use serde::{Deserialize, Serialize};

id_type!(
    /// Code uniquely identifying a spot
    SpotId(u64) as "sp"
);

/// A place or post that shifts are staffed for, such as "Kitchen" or "Front desk".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    /// Unique within the tenant.
    pub id: SpotId,

    /// Tenant the spot belongs to.
    pub tenant_id: TenantId,

    /// Display name of the spot.
    pub name: String,
}
