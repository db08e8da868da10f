/*!
 * End-to-end tests for batch evaluation through the controller
 */

use anyhow::Result;
use ticketgate::{Controller, Outcome, ViolationKind};
use crate::common::{lines, run_batch};

const MSG_INVALID: &str = "不正な入力です";
const MSG_CHAPERONE: &str = "対象の映画の入場には大人の同伴が必要です";
const MSG_AGE: &str = "対象の映画は年齢制限により閲覧できません";
const MSG_SEAT: &str = "対象のチケットではその座席をご利用いただけません";

/// Single adult at a G screening gets priced
#[test]
fn test_adultGeneral_shouldPrintPrice() -> Result<()> {
    let (outcome, output) = run_batch("Adult,G,10:00,2:00,C-12\n")?;

    assert_eq!(outcome, Outcome::Priced(vec![1800]));
    assert_eq!(lines(&output), vec!["1800円"]);
    Ok(())
}

/// A G rating admits every age category
#[test]
fn test_generalRating_withEachAge_shouldPassRatingGate() -> Result<()> {
    for (age, price) in [("Adult", "1800円"), ("Young", "1200円"), ("Child", "800円")] {
        let (_, output) = run_batch(&format!("{},G,10:00,2:00,A-1\n", age))?;
        assert_eq!(lines(&output), vec![price], "age {age}");
    }
    Ok(())
}

/// Lone child at PG-12 in the back rows hits both age and seat rules
#[test]
fn test_childPg12InRowK_shouldReportAgeAndSeat() -> Result<()> {
    let (outcome, output) = run_batch("Child,PG-12,10:00,2:00,K-1\n")?;

    assert_eq!(
        outcome,
        Outcome::Rejected(vec![ViolationKind::AgeRestricted, ViolationKind::SeatRestricted])
    );
    assert_eq!(lines(&output), vec![MSG_AGE, MSG_SEAT]);
    Ok(())
}

/// R18+ rejects young and child tickets even with adults present, and no prices are printed
#[test]
fn test_r18_withYoungAndAdult_shouldSuppressPrices() -> Result<()> {
    let input = "Adult,R18+,10:00,2:00,A-1\nYoung,R18+,10:00,2:00,A-2\nAdult,R18+,10:00,2:00,A-3\n";

    let (_, output) = run_batch(input)?;

    assert_eq!(lines(&output), vec![MSG_AGE]);
    Ok(())
}

/// Adding an adult flips a PG-12 child to passing
#[test]
fn test_pg12Child_withAdultAdded_shouldPass() -> Result<()> {
    let (_, alone) = run_batch("Child,PG-12,10:00,2:00,A-1\n")?;
    let (outcome, accompanied) = run_batch("Child,PG-12,10:00,2:00,A-1\nAdult,PG-12,10:00,2:00,A-2\n")?;

    assert_eq!(lines(&alone), vec![MSG_AGE]);
    assert_eq!(outcome, Outcome::Priced(vec![800, 1800]));
    assert_eq!(lines(&accompanied), vec!["800円", "1800円"]);
    Ok(())
}

/// Child seat rows: J-L rejected, A-I accepted
#[test]
fn test_childSeatRows_shouldFollowZoneRule() -> Result<()> {
    for row in ['J', 'K', 'L', 'j'] {
        let (_, output) = run_batch(&format!("Child,G,10:00,2:00,{}-5\n", row))?;
        assert_eq!(lines(&output), vec![MSG_SEAT], "row {row}");
    }
    for row in ['A', 'E', 'I'] {
        let (_, output) = run_batch(&format!("Child,G,10:00,2:00,{}-5\n", row))?;
        assert_eq!(lines(&output), vec!["800円"], "row {row}");
    }
    Ok(())
}

/// Child curfew is inclusive at 16:00
#[test]
fn test_childCurfew_atBoundary_shouldBeInclusive() -> Result<()> {
    let (_, on_time) = run_batch("Child,G,14:00,2:00,A-1\n")?;
    let (_, late) = run_batch("Child,G,14:00,2:01,A-1\n")?;

    assert_eq!(lines(&on_time), vec!["800円"]);
    assert_eq!(lines(&late), vec![MSG_CHAPERONE]);
    Ok(())
}

/// Young curfew is inclusive at 18:00
#[test]
fn test_youngCurfew_atBoundary_shouldBeInclusive() -> Result<()> {
    let (_, on_time) = run_batch("Young,G,16:30,1:30,A-1\n")?;
    let (_, late) = run_batch("Young,G,16:30,1:31,A-1\n")?;

    assert_eq!(lines(&on_time), vec!["1200円"]);
    assert_eq!(lines(&late), vec![MSG_CHAPERONE]);
    Ok(())
}

/// Young curfew applies whether or not children are in the batch
#[test]
fn test_youngCurfew_withChildren_shouldStillApply() -> Result<()> {
    let (_, output) = run_batch("Young,G,17:00,1:01,A-1\nChild,G,17:00,1:01,A-2\n")?;

    assert_eq!(lines(&output), vec![MSG_CHAPERONE]);
    Ok(())
}

/// An adult anywhere waives both curfews
#[test]
fn test_curfews_withAdultAdded_shouldPass() -> Result<()> {
    let input = "Young,G,20:00,2:00,A-1\nChild,G,20:00,2:00,A-2\n";
    let (_, without_adult) = run_batch(input)?;
    let (outcome, with_adult) = run_batch(&format!("{}Adult,G,20:00,2:00,A-3\n", input))?;

    assert_eq!(lines(&without_adult), vec![MSG_CHAPERONE]);
    assert_eq!(outcome, Outcome::Priced(vec![1200, 800, 1800]));
    assert_eq!(lines(&with_adult), vec!["1200円", "800円", "1800円"]);
    Ok(())
}

/// All three messages print once each, in canonical order, whatever order tickets trigger them
#[test]
fn test_allViolations_shouldPrintInCanonicalOrder() -> Result<()> {
    let input = "Child,R18+,15:00,2:00,L-1\nYoung,R18+,15:00,2:00,A-1\nChild,R18+,15:00,2:00,K-2\n";

    let (_, output) = run_batch(input)?;

    assert_eq!(lines(&output), vec![MSG_CHAPERONE, MSG_AGE, MSG_SEAT]);
    Ok(())
}

/// Malformed records print only the invalid-input message
#[test]
fn test_malformedInput_shouldPrintOnlyInvalidMessage() -> Result<()> {
    let cases = [
        "Teen,G,10:00,2:00,A-1\n",
        "Adult,G,ten,2:00,A-1\n",
        "Adult,G,10:00,2:00,M-1\n",
        "Adult,G,10:00,2:00,A-25\n",
        "Adult,PG12,10:00,2:00,A-1\n",
        "Adult,G,10:00,2:00\n",
        // A later malformed line discards the valid ones before it
        "Adult,G,10:00,2:00,A-1\nAdult,G,10:00,2:00,A\n",
        // Lines after a malformed one are never evaluated
        "Adult,G,10:00,2:00,Z-1\nChild,R18+,10:00,2:00,K-1\n",
    ];

    for input in cases {
        let (outcome, output) = run_batch(input)?;
        assert_eq!(outcome, Outcome::InvalidInput, "input {input:?}");
        assert_eq!(lines(&output), vec![MSG_INVALID], "input {input:?}");
    }
    Ok(())
}

/// A line that is not UTF-8 is malformed input, not a read failure
#[test]
fn test_nonUtf8Line_shouldPrintOnlyInvalidMessage() -> Result<()> {
    let input: &[u8] = b"Adult,G,10:00,2:00,C-12\n\xffdult,G,10:00,2:00,C-12\n";
    let mut output = Vec::new();

    let outcome = Controller::default().run(input, &mut output)?;

    assert_eq!(outcome, Outcome::InvalidInput);
    assert_eq!(String::from_utf8(output)?, "不正な入力です\n");
    Ok(())
}

/// A space after a comma is accepted, one before a comma is not
#[test]
fn test_fieldSpacing_shouldOnlyAllowLeadingSpaces() -> Result<()> {
    let (outcome, output) = run_batch("Adult, G, 10:00, 2:00, C-12\n")?;
    assert_eq!(outcome, Outcome::Priced(vec![1800]));
    assert_eq!(lines(&output), vec!["1800円"]);

    let (outcome, output) = run_batch("Adult ,G,10:00,2:00,C-12\n")?;
    assert_eq!(outcome, Outcome::InvalidInput);
    assert_eq!(lines(&output), vec![MSG_INVALID]);
    Ok(())
}

/// Empty input prints nothing
#[test]
fn test_emptyInput_shouldPrintNothing() -> Result<()> {
    let (outcome, output) = run_batch("")?;

    assert_eq!(outcome, Outcome::Empty);
    assert!(output.is_empty());
    Ok(())
}

/// Only the first record defines the screening
#[test]
fn test_laterRecordsScreening_shouldBeIgnored() -> Result<()> {
    let (_, output) = run_batch("Child,G,10:00,2:00,A-1\nChild,R18+,22:00,3:00,A-2\n")?;

    assert_eq!(lines(&output), vec!["800円", "800円"]);
    Ok(())
}
