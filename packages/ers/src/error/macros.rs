//! Macros for raising classified errors

/// Raise an occurrence of a catalog entry with a formatted trace
///
/// ```rust
/// use ers::catalog::NOT_FOUND;
///
/// let id = 42;
/// let err = ers::raise!(NOT_FOUND, "user {id} not found");
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! raise {
    ($class:expr) => {
        $crate::Error::raise(&$class, "")
    };
    ($class:expr, $($arg:tt)+) => {
        $crate::Error::raise(&$class, format!($($arg)+))
    };
}

/// Return early with a raised error
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return Err($crate::raise!($($arg)+).into())
    };
}

/// Return early with a raised error unless a condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}
