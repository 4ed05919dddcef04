#[cfg(feature = "tracing")]
macro_rules! dtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "draggable", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ddebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "draggable", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ddebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! dwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "draggable", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dwarn {
    ($($tt:tt)*) => {};
}
