//! Declarative macros for generating CLI parsing tests.
//!
//! Instead of writing repetitive test functions, declare the test cases and
//! let the macros generate the test code. The calling module must have
//! `Args`, `clap::Parser` and `rstest::rstest` in scope.

/// Generate a test for default values when invoked with minimal args.
#[macro_export]
macro_rules! cli_defaults_test {
    (
        required_args: [$($req_arg:literal),*],
        defaults: {
            $($def_field:ident : $def_expected:expr),* $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_defaults() {
            let args = Args::try_parse_from(["data_model_graphql", $($req_arg),*]).unwrap();
            $(
                assert_eq!(args.$def_field, $def_expected,
                    concat!("Default value mismatch for field: ", stringify!($def_field)));
            )*
        }
    };
}

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "data_model_graphql",
                $($arg),+
            ]).unwrap();
            assert_eq!(args.$field, $expected,
                concat!("Field ", stringify!($field), " mismatch"));
        }
    };
}

/// Generate a test asserting that an argument list is rejected.
#[macro_export]
macro_rules! cli_rejects_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),*] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "data_model_graphql",
                $($arg),*
            ]);
            assert!(result.is_err(),
                concat!("Expected rejection for args: ", stringify!([$($arg),*])));
        }
    };
}
