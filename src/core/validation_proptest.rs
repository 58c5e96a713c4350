//! Property-based tests for validation logic
//!
//! This module contains property tests that verify validation and grading
//! functions hold for every mark combination in and around the allowed range.

#[cfg(test)]
mod tests {
    use crate::core::grading::*;
    use crate::core::validation::*;
    use proptest::prelude::*;

    // Strategy for generating a full set of in-range marks
    prop_compose! {
        fn valid_marks()(
            marks in prop::array::uniform3(MIN_MARK..=MAX_MARK)
        ) -> [i32; 3] {
            marks
        }
    }

    // Strategy for a mark that is guaranteed to fall outside the range
    fn out_of_range_mark() -> impl Strategy<Value = i32> {
        prop_oneof![i32::MIN..MIN_MARK, (MAX_MARK + 1)..=i32::MAX]
    }

    proptest! {
        #[test]
        fn test_valid_marks_always_accepted(marks in valid_marks()) {
            prop_assert!(validate_marks(&marks).is_ok());
        }

        #[test]
        fn test_out_of_range_mark_names_subject(
            marks in valid_marks(),
            bad in out_of_range_mark(),
            slot in 0usize..SUBJECT_COUNT,
        ) {
            let mut marks = marks;
            marks[slot] = bad;

            let result = validate_marks(&marks);
            prop_assert_eq!(
                result,
                Err(ValidationError::MarkOutOfRange { subject: slot + 1, mark: bad })
            );
        }

        #[test]
        fn test_wrong_length_rejected(
            marks in prop::collection::vec(MIN_MARK..=MAX_MARK, 0..8)
        ) {
            let result = validate_marks(&marks);
            if marks.len() == SUBJECT_COUNT {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(ValidationError::MarkCount { found: marks.len() }));
            }
        }

        #[test]
        fn test_average_within_mark_bounds(marks in valid_marks()) {
            let avg = average(&marks);
            let lo = f64::from(*marks.iter().min().unwrap());
            let hi = f64::from(*marks.iter().max().unwrap());
            prop_assert!(avg >= lo && avg <= hi);
        }

        #[test]
        fn test_average_matches_sum(marks in valid_marks()) {
            let sum: i32 = marks.iter().sum();
            prop_assert!((average(&marks) * 3.0 - f64::from(sum)).abs() < 1e-9);
        }

        #[test]
        fn test_status_pass_iff_all_at_threshold(marks in valid_marks()) {
            let expected = if marks.iter().all(|&m| m >= PASS_MARK) {
                ResultStatus::Pass
            } else {
                ResultStatus::Fail
            };
            prop_assert_eq!(status_for(&marks), expected);
        }

        #[test]
        fn test_blank_names_rejected(name in "[ \t]{0,12}") {
            prop_assert_eq!(validate_name(&name), Err(ValidationError::EmptyName));
        }

        #[test]
        fn test_names_with_content_accepted(name in "[ ]{0,3}[A-Za-z][A-Za-z .'-]{0,30}") {
            prop_assert!(validate_name(&name).is_ok());
        }
    }
}
