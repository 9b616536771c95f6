//! Assertion macros with descriptive failure messages.

/// Assert that a path is part of a rendered artifact.
///
/// # Example
/// ```ignore
/// assert_generated!(artifact, "config/celery.py");
/// ```
#[macro_export]
macro_rules! assert_generated {
    ($artifact:expr, $path:expr) => {
        assert!(
            $artifact.contains($path),
            "Expected '{}' to be generated.\nFiles:\n  {}",
            $path,
            $artifact
                .files()
                .map(|(p, _)| p)
                .collect::<Vec<_>>()
                .join("\n  ")
        );
    };
}

/// Assert that a path is NOT part of a rendered artifact.
#[macro_export]
macro_rules! assert_not_generated {
    ($artifact:expr, $path:expr) => {
        assert!(
            !$artifact.contains($path),
            "Expected '{}' to NOT be generated, but it was.",
            $path
        );
    };
}

/// Assert that text contains every needle.
#[macro_export]
macro_rules! assert_contains_all {
    ($text:expr, [$($needle:expr),+ $(,)?]) => {
        $(
            assert!(
                $text.contains($needle),
                "Expected to find '{}' in:\n{}",
                $needle,
                $text
            );
        )+
    };
}

/// Assert that text contains none of the needles.
#[macro_export]
macro_rules! assert_contains_none {
    ($text:expr, [$($needle:expr),+ $(,)?]) => {
        $(
            assert!(
                !$text.contains($needle),
                "Expected NOT to find '{}' in:\n{}",
                $needle,
                $text
            );
        )+
    };
}
