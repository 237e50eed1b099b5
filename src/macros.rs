#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debugln {
    ($($rest:tt)*) => {
        std::println!($($rest)*)
    }
}

#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debugln {
    ($($rest:tt)*) => {
        ()
    };
}

/// Prints an informational message, mirroring [`debugln`] but always
/// enabled regardless of the `debug` feature, used for messages that
/// are relevant independently of verbose debugging being on.
#[macro_export]
macro_rules! infoln {
    ($($rest:tt)*) => {
        std::println!($($rest)*)
    }
}

/// Prints a warning message to standard error, used for recoverable
/// but noteworthy conditions (unimplemented register writes, fallback
/// behaviour, etc).
#[macro_export]
macro_rules! warnln {
    ($($rest:tt)*) => {
        std::eprintln!($($rest)*)
    }
}

/// Prints an error message to standard error, used for conditions that
/// indicate something has gone clearly wrong but that do not warrant
/// aborting execution.
#[macro_export]
macro_rules! errorln {
    ($($rest:tt)*) => {
        std::eprintln!($($rest)*)
    }
}
