//! Records handed over by the REST layer.
//!
//! These mirror the tenant-scoped resources the roster service exposes. The
//! grid only reads them, except for [`Shift`] time slots, which blobs write
//! through to.

pub mod employee;
pub mod shift;
pub mod spot;

pub use employee::*;
pub use shift::*;
pub use spot::*;

use serde::{Deserialize, Serialize};

/// Declare an ID newtype with a short, prefixed hexadecimal [`Display`](std::fmt::Display).
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident($repr:ty) as $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ".{:x}"), self.0)
            }
        }
    };
}

pub(crate) use id_type;

id_type!(
    /// Code uniquely identifying a tenant - every other record is scoped to one
    TenantId(u32) as "tn"
);

/// Everything one tenant's roster grid draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    /// Tenant owning the roster.
    pub tenant_id: TenantId,

    /// Spots in display order; each becomes one lane of the grid.
    pub spots: Vec<Spot>,

    /// Shifts in any order.
    pub shifts: Vec<Shift>,
}

impl Roster {
    /// Look up a shift by ID.
    pub fn shift(&self, id: ShiftId) -> Option<&Shift> {
        self.shifts.iter().find(|shift| shift.id == id)
    }
}
