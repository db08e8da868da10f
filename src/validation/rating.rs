/*!
 * Content-rating gate.
 *
 * - G: open to everyone
 * - PG-12: children need an adult somewhere in the batch
 * - R18+: adults only, an accompanying adult does not help
 */

use crate::ticket::{AgeCategory, ContentRating};

/// Returns true when `age` may watch a screening rated `rating`
pub fn check_rating(age: AgeCategory, rating: ContentRating, has_adult: bool) -> bool {
    match rating {
        ContentRating::General => true,
        ContentRating::ParentalGuidance12 => !(age == AgeCategory::Child && !has_adult),
        ContentRating::Restricted18 => age == AgeCategory::Adult,
    }
}
