/*!
 * Batch-wide facts that every per-ticket rule can consult.
 */

use crate::ticket::{AgeCategory, Ticket};

/// Who is present anywhere in the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupFacts {
    /// At least one Adult ticket
    pub has_adult: bool,
    /// At least one Child ticket
    pub has_child: bool,
}

impl GroupFacts {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        Self {
            has_adult: tickets.iter().any(|t| t.age == AgeCategory::Adult),
            has_child: tickets.iter().any(|t| t.age == AgeCategory::Child),
        }
    }
}
