#[macro_export]
macro_rules! test_split_valid {
    ($name:ident::$input:expr => [$($expected:expr),*]) => {
        paste::item! {
            #[test]
            fn [< test_split_valid_ $name >]() -> Result<(), pgsplit::SplitError> {
                let statements = pgsplit::split_statements($input)?;
                let expected: Vec<&str> = vec![$($expected),*];

                assert_eq!(statements, expected, "input: {:?}", $input);

                Ok(())
            }
        }
    };

    ($name:ident::$input:expr) => {
        $crate::test_split_valid!($name::$input => [$input]);
    };
}

#[macro_export]
macro_rules! test_split_invalid {
    ($name:ident::$error:ident::($($input:expr),+)) => {
        paste::item! {
            #[test]
            fn [< test_split_invalid_ $name >]() {
                $(
                    assert_eq!(
                        pgsplit::split_statements($input),
                        Err(pgsplit::SplitError::$error),
                        "input: {:?}",
                        $input
                    );
                )+
            }
        }
    };
}
