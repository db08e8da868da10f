/*!
 * Eligibility service that runs every gate over a batch.
 *
 * The whole batch is always evaluated so that every distinct violation
 * category is collected, even after the first failing ticket.
 */

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::ticket::{ClockTime, ContentRating, Ticket, TicketBatch};

use super::curfew::check_curfew;
use super::group::GroupFacts;
use super::rating::check_rating;
use super::seat::check_seat;

/// Category of a failed gate. Variant order is the order messages are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViolationKind {
    /// Curfew gate failed, an adult would have to come along
    ChaperoneRequired,
    /// Content-rating gate failed
    AgeRestricted,
    /// Seat-zone gate failed
    SeatRestricted,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 3] = [
        ViolationKind::ChaperoneRequired,
        ViolationKind::AgeRestricted,
        ViolationKind::SeatRestricted,
    ];
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ChaperoneRequired => "chaperone required",
            Self::AgeRestricted => "age restricted",
            Self::SeatRestricted => "seat restricted",
        };
        write!(f, "{}", name)
    }
}

/// The showing every ticket in a batch is assumed to be for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screening {
    pub rating: ContentRating,
    pub end: ClockTime,
}

impl Screening {
    /// Takes rating and end time from the given record
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            rating: ticket.rating,
            end: ticket.end_time(),
        }
    }
}

/// Outcome of all gates for one ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketVerdict {
    /// Position of the ticket in the batch, 0-based
    pub index: usize,
    /// Failed gates, in canonical order
    pub violations: Vec<ViolationKind>,
}

impl TicketVerdict {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Result of evaluating a whole batch
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Distinct violation categories across the batch
    pub violations: BTreeSet<ViolationKind>,
    /// One verdict per ticket, in input order
    pub verdicts: Vec<TicketVerdict>,
    /// Batch-wide facts used during evaluation
    pub group: GroupFacts,
    /// Shared screening, absent for an empty batch
    pub screening: Option<Screening>,
}

impl ValidationReport {
    /// Whether every ticket passed every gate
    pub fn all_passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation categories in print order
    pub fn violations_in_order(&self) -> impl Iterator<Item = ViolationKind> + '_ {
        self.violations.iter().copied()
    }

    /// Number of tickets that failed at least one gate
    pub fn failed_count(&self) -> usize {
        self.verdicts.iter().filter(|v| !v.passed()).count()
    }
}

/// Runs the rating, seat and curfew gates over ticket batches
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityService;

impl EligibilityService {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a single ticket against the shared screening
    pub fn evaluate_ticket(
        &self,
        index: usize,
        ticket: &Ticket,
        screening: &Screening,
        group: &GroupFacts,
    ) -> TicketVerdict {
        let mut violations = Vec::new();

        if !check_curfew(ticket.age, screening.end, group.has_adult, group.has_child) {
            violations.push(ViolationKind::ChaperoneRequired);
        }
        if !check_rating(ticket.age, screening.rating, group.has_adult) {
            violations.push(ViolationKind::AgeRestricted);
        }
        if !check_seat(ticket.seat.row, ticket.age) {
            violations.push(ViolationKind::SeatRestricted);
        }

        TicketVerdict { index, violations }
    }

    /// Evaluate every ticket in the batch
    pub fn evaluate(&self, batch: &TicketBatch) -> ValidationReport {
        let Some(first) = batch.screening_ticket() else {
            return ValidationReport::default();
        };

        let group = GroupFacts::from_tickets(batch.tickets());
        let screening = Screening::from_ticket(first);
        debug!(
            "Screening {} ending {}, adult present: {}, child present: {}",
            screening.rating, screening.end, group.has_adult, group.has_child
        );

        let verdicts: Vec<TicketVerdict> = batch
            .tickets()
            .iter()
            .enumerate()
            .map(|(index, ticket)| self.evaluate_ticket(index, ticket, &screening, &group))
            .collect();

        let mut violations = BTreeSet::new();
        for verdict in &verdicts {
            if !verdict.passed() {
                debug!(
                    "Ticket {} ({}) failed: {:?}",
                    verdict.index + 1,
                    batch.tickets()[verdict.index],
                    verdict.violations
                );
            }
            violations.extend(verdict.violations.iter().copied());
        }

        ValidationReport {
            violations,
            verdicts,
            group,
            screening: Some(screening),
        }
    }
}
