/// Checks whether a given boolean expression is true or false, logs a warning if it is false, and
/// returns the result of the boolean expression.
///
/// ```ignore
/// let valid = warn_unless!(axes.len() >= 2, "Got {} axes", axes.len());
/// ```
#[cfg(feature = "log")]
macro_rules! warn_unless {
    ( $condition:expr, $message:expr $(, $format_arg:expr)* $(,)? ) => {
        if $condition {
            true
        } else {
            ::log::warn!($message $(,$format_arg)*);
            false
        }
    }
}

#[cfg(not(feature = "log"))]
macro_rules! warn_unless {
    ( $condition:expr $(, $_format_arg:expr)* $(,)? ) => {
        $condition
    }
}

pub(crate) use warn_unless;
