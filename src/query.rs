// Stateless views over a record sequence
//
// Every function here returns a lazy iterator. Calling it again re-scans the
// sequence, so results always reflect the records as they are now.

use crate::filter::Filter;
use crate::record::Record;

/// Records whose `field` is a string starting with `prefix`
///
/// Case-sensitive, byte-wise. Records where the field is missing or not a
/// string are skipped.
pub fn filter_by_prefix<'a>(
    records: &'a [Record],
    field: &str,
    prefix: &str,
) -> impl Iterator<Item = &'a Record> + use<'a> {
    let filter = Filter::starts_with(field, prefix);
    records.iter().filter(move |record| filter.matches(record))
}

/// Records whose `field` is exactly boolean `true`
///
/// False, missing and non-boolean values all exclude the record.
pub fn filter_by_boolean_field<'a>(records: &'a [Record], field: &str) -> impl Iterator<Item = &'a Record> + use<'a> {
    let filter = Filter::is_true(field);
    records.iter().filter(move |record| filter.matches(record))
}

/// Records matching every filter, in sequence order
///
/// An empty filter list matches everything.
pub fn filter<'a, 'f>(records: &'a [Record], filters: &'f [Filter]) -> impl Iterator<Item = &'a Record> + use<'a, 'f> {
    records
        .iter()
        .filter(move |record| filters.iter().all(|filter| filter.matches(record)))
}
