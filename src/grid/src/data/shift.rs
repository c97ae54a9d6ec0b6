//! See [`Shift`]

use super::{Employee, SpotId, TenantId, id_type};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, de::Visitor};

id_type!(
    /// Code uniquely identifying a shift
    ShiftId(u64) as "sh"
);

/// Label shown on a shift nobody has been assigned to.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// The stretch of local time a shift covers.
///
/// Sorts by start; slots starting together sort shorter first. Lanes draw
/// shifts left to right in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot {
    /// Beginning of the slot
    pub start: NaiveDateTime,

    /// Conclusion of the slot
    pub end: NaiveDateTime,
}

/// Custom [`Deserialize`] implementation accepting `{"start", "end"}`, `[start, end]` or `"start..end"`.
///
/// Time-reversed slots are rejected here; once loaded, blobs may write any value.
///
/// ```
/// # use grid::data::TimeSlot;
/// let slot: TimeSlot =
///     serde_json::from_str(r#""2025-04-05T09:00:00..2025-04-05T17:00:00""#).unwrap();
/// assert_eq!(slot.end, grid::datetime!(4/5/2025 @ 17:00));
/// ```
impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeSlotVisitor;
        use serde::de::Error;

        impl<'de> Visitor<'de> for TimeSlotVisitor {
            type Value = TimeSlot;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct TimeSlot")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let start = seq
                    .next_element::<NaiveDateTime>()?
                    .ok_or_else(|| Error::invalid_length(0, &self))?;
                let end = seq
                    .next_element::<NaiveDateTime>()?
                    .ok_or_else(|| Error::invalid_length(1, &self))?;
                Ok(TimeSlot { start, end })
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[derive(Deserialize)]
                #[serde(field_identifier, rename_all = "lowercase")]
                enum Field {
                    Start,
                    End,
                }

                let mut start = None;
                let mut end = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Start => {
                            if start.is_some() {
                                return Err(Error::duplicate_field("start"));
                            }
                            start = Some(map.next_value()?);
                        }
                        Field::End => {
                            if end.is_some() {
                                return Err(Error::duplicate_field("end"));
                            }
                            end = Some(map.next_value()?);
                        }
                    }
                }
                let start = start.ok_or_else(|| Error::missing_field("start"))?;
                let end = end.ok_or_else(|| Error::missing_field("end"))?;
                Ok(TimeSlot { start, end })
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                let (start, end) = v
                    .split_once("..")
                    .ok_or_else(|| Error::invalid_length(1, &self))?;
                let start = start.parse::<NaiveDateTime>().map_err(Error::custom)?;
                let end = end.parse::<NaiveDateTime>().map_err(Error::custom)?;
                Ok(TimeSlot { start, end })
            }
        }

        deserializer
            .deserialize_any(TimeSlotVisitor)
            .and_then(|slot| {
                if slot.start <= slot.end {
                    Ok(slot)
                } else {
                    Err(Error::invalid_value(
                        serde::de::Unexpected::Other("time-reversed slot"),
                        &TimeSlotVisitor,
                    ))
                }
            })
    }
}

impl PartialOrd for TimeSlot {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeSlot {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.start, self.end).cmp(&(other.start, other.end))
    }
}

/// One staffing requirement on the roster: a spot, a time slot and (maybe) an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique within the tenant.
    pub id: ShiftId,

    /// Tenant the shift belongs to.
    pub tenant_id: TenantId,

    /// Spot the shift staffs; selects the lane it is drawn in.
    pub spot_id: SpotId,

    /// When the shift runs.
    pub time_slot: TimeSlot,

    /// [`None`]: nobody is assigned yet.
    #[serde(default)]
    pub employee: Option<Employee>,
}

impl Shift {
    /// Name of the assigned employee, or [`UNASSIGNED_LABEL`].
    pub fn label(&self) -> &str {
        self.employee
            .as_ref()
            .map_or(UNASSIGNED_LABEL, |employee| employee.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime;

    fn slot(start: NaiveDateTime, end: NaiveDateTime) -> TimeSlot {
        TimeSlot { start, end }
    }

    #[test]
    fn test_slot_forms() {
        let expected = slot(datetime!(4/5/2025 @ 9:00), datetime!(4/5/2025 @ 17:00));
        for json in [
            r#"{"start": "2025-04-05T09:00:00", "end": "2025-04-05T17:00:00"}"#,
            r#"["2025-04-05T09:00:00", "2025-04-05T17:00:00"]"#,
            r#""2025-04-05T09:00:00..2025-04-05T17:00:00""#,
        ] {
            assert_eq!(
                serde_json::from_str::<TimeSlot>(json).unwrap(),
                expected,
                "{json} should parse"
            );
        }
    }

    #[test]
    fn test_slot_serializes_as_map() {
        let json = serde_json::to_value(slot(
            datetime!(4/5/2025 @ 9:00),
            datetime!(4/5/2025 @ 17:00),
        ))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"start": "2025-04-05T09:00:00", "end": "2025-04-05T17:00:00"})
        );
    }

    #[test]
    fn test_slot_rejects_reversed() {
        assert!(
            serde_json::from_str::<TimeSlot>(r#""2025-04-05T17:00:00..2025-04-05T09:00:00""#)
                .is_err(),
            "a slot ending before it starts should be rejected"
        );
    }

    #[test]
    fn test_slot_rejects_missing_and_duplicate_fields() {
        assert!(serde_json::from_str::<TimeSlot>(r#"{"start": "2025-04-05T09:00:00"}"#).is_err());
        assert!(
            serde_json::from_str::<TimeSlot>(
                r#"{"start": "2025-04-05T09:00:00", "start": "2025-04-05T10:00:00", "end": "2025-04-05T11:00:00"}"#
            )
            .is_err()
        );
        assert!(serde_json::from_str::<TimeSlot>(r#""2025-04-05T09:00:00""#).is_err());
    }

    #[test]
    fn test_slot_ordering() {
        let early = slot(datetime!(4/5/2025 @ 9:00), datetime!(4/5/2025 @ 17:00));
        let early_short = slot(datetime!(4/5/2025 @ 9:00), datetime!(4/5/2025 @ 12:00));
        let late = slot(datetime!(4/5/2025 @ 10:00), datetime!(4/5/2025 @ 11:00));
        let mut slots = vec![late, early, early_short];
        slots.sort();
        assert_eq!(slots, vec![early_short, early, late]);
    }

    #[test]
    fn test_label() {
        let mut shift = Shift {
            id: ShiftId(1),
            tenant_id: TenantId(0),
            spot_id: SpotId(0),
            time_slot: slot(datetime!(4/5/2025 @ 9:00), datetime!(4/5/2025 @ 10:00)),
            employee: None,
        };
        assert_eq!(shift.label(), UNASSIGNED_LABEL);
        shift.employee = Some(Employee {
            id: crate::data::EmployeeId(1),
            tenant_id: TenantId(0),
            name: "Alice".to_string(),
        });
        assert_eq!(shift.label(), "Alice");
    }
}
