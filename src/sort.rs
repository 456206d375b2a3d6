//! Ordering of extracted lists

use crate::walker::ScrapeResult;

/// Sort a list ascending by byte order, keeping duplicates
pub fn sort_strings(list: &mut [String]) {
    list.sort_unstable();
}

/// Sort both lists of every result in the batch
pub fn sort_batch(batch: &mut [ScrapeResult]) {
    for result in batch {
        sort_strings(&mut result.endpoints);
        sort_strings(&mut result.hrefs);
    }
}
