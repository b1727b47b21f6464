//! Macros for declaring record metadata.

/// Declare [`RecordMetadata`](crate::metadata::RecordMetadata) with a compact syntax.
///
/// Each line names a field, its kind tag and the constraint parameters.
/// Kind tags are written as in the declaration (`Int`, `Float`, `Number`,
/// `String`); any other tag is stored and skipped during validation.
///
/// # Example
///
/// ```
/// use fieldcheck::record_constraints;
///
/// let person = record_constraints! {
///     name: String { minLength: 3, maxLength: 40 },
///     age: Number { minValue: 18 },
/// };
///
/// assert_eq!(person.len(), 2);
/// assert_eq!(person.entries()[1].key, "$field$.age");
/// ```
#[macro_export]
macro_rules! record_constraints {
    (
        $(
            $field:ident : $kind:ident {
                $( $param:ident : $value:expr ),* $(,)?
            }
        ),* $(,)?
    ) => {
        $crate::metadata::RecordMetadata::builder()
            $(
                .annotate(stringify!($field), stringify!($kind), {
                    let params: ::std::vec::Vec<$crate::constraints::ConstraintParam> = ::std::vec![
                        $( $crate::constraints::ConstraintParam::new(stringify!($param), $value) ),*
                    ];
                    params
                })
            )*
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::constraints::ConstraintParam;
    use crate::core::Literal;

    #[test]
    fn record_constraints_macro_builds_metadata() {
        let metadata = record_constraints! {
            name: String { minLength: 3 },
            score: Float { minValueExclusive: 0.0, maxValue: 1.0 },
        };

        assert_eq!(metadata.len(), 2);

        let name = &metadata.entries()[0];
        assert_eq!(name.key, "$field$.name");
        assert_eq!(name.annotations[0].tag, "constraint:1:String");
        assert_eq!(
            name.annotations[0].params,
            vec![ConstraintParam::new("minLength", 3)]
        );

        let score = &metadata.entries()[1];
        assert_eq!(score.annotations[0].tag, "constraint:1:Float");
        assert_eq!(score.annotations[0].params[1].value, Literal::Float(1.0));
    }

    #[test]
    fn record_constraints_accepts_unknown_tags_and_empty_params() {
        let metadata = record_constraints! {
            created: Date {},
        };

        let entry = &metadata.entries()[0];
        assert_eq!(entry.annotations[0].tag, "constraint:1:Date");
        assert!(entry.annotations[0].params.is_empty());
    }

    #[test]
    fn record_constraints_empty_invocation() {
        let metadata = record_constraints! {};
        assert!(metadata.is_empty());
    }
}
