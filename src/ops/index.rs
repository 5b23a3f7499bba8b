//! Turning user-typed record numbers into records.
//!
//! Users address records by their 1-based position in the current listing.
//! Anything that is not an integer in `[1, len]` is rejected without
//! touching the collection.

use crate::model::{Record, RecordId, Session};

use super::OpError;

/// Parse a 1-based record number typed by the user.
///
/// Surrounding whitespace is ignored. Integers outside `[1, len]`, zero and
/// negatives included, are out of range; anything else is not a number.
pub fn parse_index<R: Record>(input: &str, len: usize) -> Result<usize, OpError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n >= 1 && (n as u64) <= len as u64 => Ok(n as usize),
        Ok(_) => Err(out_of_range::<R>(trimmed, len)),
        Err(_) if looks_like_integer(trimmed) => Err(out_of_range::<R>(trimmed, len)),
        Err(_) => Err(OpError::InvalidNumber(trimmed.to_string())),
    }
}

/// Look up the record at a 1-based index.
pub(crate) fn resolve<R: Record>(session: &Session<R>, index: usize) -> Result<RecordId, OpError> {
    let records = session.records();
    records
        .id_at(index)
        .ok_or_else(|| out_of_range::<R>(index, records.len()))
}

/// The record behind `id`, which was shown to the user as `index`.
pub(crate) fn record<R: Record>(
    session: &Session<R>,
    id: RecordId,
    index: usize,
) -> Result<&R, OpError> {
    let records = session.records();
    records
        .get(id)
        .ok_or_else(|| out_of_range::<R>(index, records.len()))
}

pub(crate) fn record_mut<R: Record>(
    session: &mut Session<R>,
    id: RecordId,
    index: usize,
) -> Result<&mut R, OpError> {
    let len = session.records().len();
    session
        .records_mut()
        .get_mut(id)
        .ok_or_else(|| out_of_range::<R>(index, len))
}

pub(crate) fn out_of_range<R: Record>(input: impl ToString, len: usize) -> OpError {
    OpError::IndexOutOfRange {
        noun: R::NOUN,
        input: input.to_string(),
        len,
    }
}

/// Digits with an optional sign, too large for i64
fn looks_like_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::RecordStore;
    use crate::model::Task;
    use tempfile::TempDir;

    fn parse(input: &str, len: usize) -> Result<usize, OpError> {
        parse_index::<Task>(input, len)
    }

    #[test]
    fn accepts_range_bounds() {
        assert_eq!(parse("1", 3).unwrap(), 1);
        assert_eq!(parse("3", 3).unwrap(), 3);
    }

    #[test]
    fn ignores_surrounding_whitespace_and_plus_sign() {
        assert_eq!(parse("  2\n", 3).unwrap(), 2);
        assert_eq!(parse("+2", 3).unwrap(), 2);
    }

    #[test]
    fn zero_negative_and_past_end_are_out_of_range() {
        for input in ["0", "-1", "4"] {
            assert!(
                matches!(parse(input, 3), Err(OpError::IndexOutOfRange { .. })),
                "{input}"
            );
        }
    }

    #[test]
    fn huge_integer_is_out_of_range_not_invalid() {
        assert!(matches!(
            parse("99999999999999999999999", 3),
            Err(OpError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn non_integers_are_invalid() {
        for input in ["", "abc", "1.5", "one", "1 2", "-"] {
            assert!(
                matches!(parse(input, 3), Err(OpError::InvalidNumber(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn empty_collection_rejects_everything() {
        assert!(matches!(parse("1", 0), Err(OpError::IndexOutOfRange { .. })));
    }

    #[test]
    fn out_of_range_message_names_the_record_kind() {
        let err = parse("7", 2).unwrap_err();
        assert_eq!(err.to_string(), "no task numbered 7 (valid: 1-2)");
    }

    #[test]
    fn removed_record_is_out_of_range() {
        let dir = TempDir::new().unwrap();
        let mut session: Session<Task> =
            Session::open(RecordStore::new(dir.path().join("tasks.json"))).unwrap();
        session.records_mut().push(Task::new("keep"));
        let stale = session.records_mut().push(Task::new("gone"));
        session.records_mut().remove(stale);

        let err = record(&session, stale, 2).unwrap_err();
        assert_eq!(err.to_string(), "no task numbered 2 (valid: 1-1)");
        assert!(matches!(
            record_mut(&mut session, stale, 2),
            Err(OpError::IndexOutOfRange { .. })
        ));
    }
}
