use super::{
    backend::{ActiveBackend, Backend},
    exception::CaughtException,
};
use core::any::Any;

/// Throw an exception.
///
/// `cause` becomes the payload of the exception. It can be caught with [`catch::<_, E>`](catch) or
/// [`try_block_of::<E>`](try_block_of) when `E` is its exact type, or by [`try_block`] regardless
/// of type.
///
/// Unlike `panic!`, this does not invoke the panic hook, so nothing is printed when the exception is
/// caught. If uncaught, exceptions eventually terminate the thread, like panics do.
///
/// # Example
///
/// ```should_panic
/// use tryblock::throw;
///
/// throw("Oops!");
/// ```
#[inline]
pub fn throw<E: Any + Send>(cause: E) -> ! {
    ActiveBackend::throw(Box::new(cause))
}

/// Run `block`, returning the exception it raised, if any.
///
/// If `block` completes normally, this function returns [`None`]. If an exception escapes
/// `block`, be it a panic or a value passed to [`throw`], it is intercepted here and returned as a
/// [`CaughtException`]. No exception ever propagates past this function.
///
/// Exceptions that `block` catches internally are invisible to this function.
///
/// Destructors of locals inside `block` run before this function returns, as with any unwind. The
/// caller is responsible for state shared with `block` that may be left half-updated by the
/// exception, much like with [`catch_unwind`](std::panic::catch_unwind) and
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe).
///
/// # Example
///
/// ```rust
/// use tryblock::try_block;
///
/// let mut counter = 0;
/// let ex = try_block(|| {
///     counter = 1;
///     panic!("boom");
/// });
///
/// assert_eq!(ex.unwrap().message(), Some("boom"));
/// assert_eq!(counter, 1);
/// ```
#[inline]
#[must_use = "the caught exception is lost if the result is ignored"]
pub fn try_block(block: impl FnOnce()) -> Option<CaughtException> {
    ActiveBackend::intercept(block)
        .err()
        .map(CaughtException::new)
}

/// Catch an exception of type `E`.
///
/// If `func` returns a value, this function wraps it in [`Ok`].
///
/// If `func` throws an exception whose payload is of type `E`, this function returns it, wrapped in
/// [`Err`].
///
/// Exceptions of any other type, including panics unless `E` matches their message type, are
/// propagated as-is and not caught.
///
/// # Example
///
/// ```rust
/// use anyhow::{Error, anyhow};
/// use tryblock::*;
///
/// fn parse(s: &str) -> u32 {
///     s.parse().unwrap_or_else(|_| throw::<Error>(anyhow!("not a number: {s}")))
/// }
///
/// assert_eq!(catch::<_, Error>(|| parse("12")).unwrap(), 12);
/// assert_eq!(
///     catch::<_, Error>(|| parse("twelve")).unwrap_err().to_string(),
///     "not a number: twelve",
/// );
/// ```
#[allow(clippy::missing_errors_doc)]
#[inline]
pub fn catch<R, E: Any + Send>(func: impl FnOnce() -> R) -> Result<R, E> {
    ActiveBackend::intercept(func).map_err(|payload| match payload.downcast::<E>() {
        Ok(cause) => *cause,
        Err(payload) => ActiveBackend::throw(payload),
    })
}

/// Run `block`, returning the exception of type `E` it raised, if any.
///
/// This is [`try_block`] narrowed to a single exception type: exceptions of other types propagate
/// past this function unchanged.
///
/// # Example
///
/// ```rust
/// use tryblock::{throw, try_block, try_block_of};
///
/// struct Retry;
///
/// assert!(try_block_of::<Retry>(|| throw(Retry)).is_some());
///
/// // A `u8` is not a `Retry`, so it reaches the outer guard.
/// let outer = try_block(|| {
///     let _ = try_block_of::<Retry>(|| throw(1_u8));
/// });
/// assert!(outer.unwrap().is::<u8>());
/// ```
#[inline]
#[must_use = "the caught exception is lost if the result is ignored"]
pub fn try_block_of<E: Any + Send>(block: impl FnOnce()) -> Option<E> {
    catch::<(), E>(block).err()
}
