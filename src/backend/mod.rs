use core::any::Any;

/// The value an unwind carries, as produced by `panic!` or `resume_unwind`.
pub(crate) type Payload = Box<dyn Any + Send>;

/// An unwinding backend.
///
/// Unwinding is a mechanism of forcefully "returning" through multiple call frames, called
/// *throwing*, up until a special call frame, called *interceptor*. This roughly corresponds to the
/// `resume_unwind`/`catch_unwind` pair on Rust and `throw`/`catch` pair on C++.
///
/// It's crucial that unwinding doesn't require (source-level) cooperation from the intermediate
/// call frames.
///
/// Backends treat payloads as opaque. They neither inspect nor wrap them, so a payload that is
/// thrown is exactly the payload that is intercepted.
///
/// Implementations must ensure that a thrown payload unwinds to the closest (most nested)
/// `intercept` frame and that all destructors of locals are run on the way, as if `return` was
/// called. Several payloads can be in flight at once if a destructor throws and intercepts its own
/// exception during unwinding; they are intercepted in the reverse order of throwing.
pub(crate) trait Backend {
    /// Throw a payload.
    ///
    /// The panic hook is not invoked.
    fn throw(payload: Payload) -> !;

    /// Catch an exception.
    ///
    /// This function returns `Ok` if the function returns normally, or `Err` if it throws (and the
    /// thrown payload is not caught by a nested interceptor).
    fn intercept<Func: FnOnce() -> R, R>(func: Func) -> Result<R, Payload>;
}

#[cfg(backend = "panic")]
#[path = "panic.rs"]
mod imp;

#[cfg(backend = "abort")]
#[path = "abort.rs"]
mod imp;

pub(crate) use imp::ActiveBackend;
