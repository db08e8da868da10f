/*!
 * Eligibility validation for a batch of ticket records.
 *
 * Every ticket in a batch is checked against the screening shared by the
 * batch (the first record's rating and times):
 * - Content rating against the ticket's age category
 * - Seat row against the ticket's age category
 * - Screening end time against curfews for unaccompanied children and young patrons
 *
 * # Architecture
 *
 * - `group`: Batch-wide facts (adult present, child present)
 * - `rating`: Content-rating gate
 * - `seat`: Seat-zone gate
 * - `curfew`: Curfew gate
 * - `service`: Runs all gates and collects distinct violations
 */

pub mod group;
pub mod rating;
pub mod seat;
pub mod curfew;
pub mod service;

// Re-export main types
pub use group::GroupFacts;
pub use service::{EligibilityService, Screening, TicketVerdict, ValidationReport, ViolationKind};
