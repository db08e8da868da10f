/*!
 * Seat-zone gate: the back rows are closed to children.
 */

use crate::ticket::AgeCategory;

/// Rows children may not sit in
pub const RESTRICTED_ROWS: [char; 3] = ['J', 'K', 'L'];

/// Returns true when `age` may sit in `row`
pub fn check_seat(row: char, age: AgeCategory) -> bool {
    !(RESTRICTED_ROWS.contains(&row) && age == AgeCategory::Child)
}
