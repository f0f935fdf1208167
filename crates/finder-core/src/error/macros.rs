//! Error macros for finder

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::FinderError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::FinderError::UsageError($msg.to_string()))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::FinderError::unsupported(
            $context, $value, $supported,
        ))
    };
}

/// Macro for mapping candidate store errors
#[macro_export]
macro_rules! map_store_err {
    ($op:expr, $error:expr) => {
        $crate::error::FinderError::store_operation($op, $error)
    };
}
