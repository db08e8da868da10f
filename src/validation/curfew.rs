/*!
 * Curfew gate.
 *
 * An adult anywhere in the batch waives every curfew. Without one, a batch
 * containing children must end by 16:00 and young patrons must be out by
 * 18:00. Both limits are inclusive at exactly the hour.
 */

use crate::ticket::{AgeCategory, ClockTime};

/// Latest end hour when children are present without an adult
pub const CHILD_CURFEW_HOUR: u32 = 16;

/// Latest end hour for young patrons without an adult
pub const YOUNG_CURFEW_HOUR: u32 = 18;

/// True when `end` is later than `hour`:00
fn ends_after(end: ClockTime, hour: u32) -> bool {
    end.hour > hour || (end.hour == hour && end.minute > 0)
}

/// Returns true when the screening ending at `end` respects the curfew for this ticket
pub fn check_curfew(age: AgeCategory, end: ClockTime, has_adult: bool, has_child: bool) -> bool {
    if has_adult {
        return true;
    }

    if has_child && ends_after(end, CHILD_CURFEW_HOUR) {
        return false;
    }

    if age == AgeCategory::Young && ends_after(end, YOUNG_CURFEW_HOUR) {
        return false;
    }

    true
}
