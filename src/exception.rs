use super::backend::{ActiveBackend, Backend, Payload};
use core::any::Any;
use core::fmt;

/// A caught exception.
///
/// This is the value [`try_block`](crate::try_block) returns when its block raised. It owns the
/// payload the exception was raised with, e.g. the message of a `panic!` or the value passed to
/// [`throw`](crate::throw), and never inspects or converts it. The accessors below only look at the
/// payload; [`into_payload`](Self::into_payload) and [`resume`](Self::resume) hand it back
/// unchanged.
// Type invariant: `payload` is exactly the payload the exception was raised with.
pub struct CaughtException {
    payload: Payload,
}

impl CaughtException {
    pub(crate) const fn new(payload: Payload) -> Self {
        Self { payload }
    }

    /// Check whether the payload is of type `T`.
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Borrow the payload as `T`, if it has that type.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Mutably borrow the payload as `T`, if it has that type.
    ///
    /// Useful for adding context to an exception before [`resume`](Self::resume)-ing it.
    #[inline]
    #[must_use]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.payload.downcast_mut::<T>()
    }

    /// Take the payload out as `T`.
    ///
    /// If the payload has a different type, the exception is handed back intact.
    ///
    /// # Errors
    ///
    /// Returns `self` if the payload is not a `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryblock::{throw, try_block};
    ///
    /// let ex = try_block(|| throw(404_u16)).unwrap();
    /// let ex = ex.downcast::<String>().unwrap_err();
    /// assert_eq!(*ex.downcast::<u16>().unwrap(), 404);
    /// ```
    #[inline]
    pub fn downcast<T: Any>(self) -> Result<Box<T>, Self> {
        self.payload.downcast::<T>().map_err(Self::new)
    }

    /// The message of the exception, if the payload is a string.
    ///
    /// `panic!` raises `&'static str` for literal messages and [`String`] for formatted ones; both
    /// are recognized. Other payloads have no message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryblock::try_block;
    ///
    /// let code = 7;
    /// let ex = try_block(|| panic!("exit code {code}")).unwrap();
    /// assert_eq!(ex.message(), Some("exit code 7"));
    /// ```
    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Release the raw payload.
    #[inline]
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Raise the exception again, with the same payload.
    ///
    /// The panic hook is not invoked a second time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryblock::try_block;
    ///
    /// let outer = try_block(|| {
    ///     let inner = try_block(|| panic!("boom")).unwrap();
    ///     inner.resume();
    /// });
    /// assert_eq!(outer.unwrap().message(), Some("boom"));
    /// ```
    #[inline]
    pub fn resume(self) -> ! {
        ActiveBackend::throw(self.payload)
    }
}

impl From<CaughtException> for Box<dyn Any + Send> {
    #[inline]
    fn from(ex: CaughtException) -> Self {
        ex.into_payload()
    }
}

impl fmt::Debug for CaughtException {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("CaughtException");
        match self.message() {
            Some(message) => s.field("message", &message),
            None => s.field("payload", &self.payload),
        };
        s.finish()
    }
}

impl fmt::Display for CaughtException {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("exception with a non-string payload"))
    }
}

impl std::error::Error for CaughtException {}

#[cfg(all(test, backend = "panic"))]
mod test {
    use super::*;

    fn caught<T: Any + Send>(payload: T) -> CaughtException {
        CaughtException::new(Box::new(payload))
    }

    #[test]
    fn message_from_str() {
        assert_eq!(caught("boom").message(), Some("boom"));
    }

    #[test]
    fn message_from_string() {
        assert_eq!(caught(String::from("boom")).message(), Some("boom"));
    }

    #[test]
    fn no_message_from_other_payloads() {
        let ex = caught(5_i32);
        assert_eq!(ex.message(), None);
        assert_eq!(ex.to_string(), "exception with a non-string payload");
    }

    #[test]
    fn downcasting() {
        let ex = caught(5_i32);
        assert!(ex.is::<i32>());
        assert!(!ex.is::<i64>());
        assert_eq!(ex.downcast_ref::<i32>(), Some(&5));
        assert_eq!(ex.downcast_ref::<i64>(), None);

        let mut ex = ex.downcast::<i64>().unwrap_err();
        *ex.downcast_mut::<i32>().unwrap() += 1;
        assert_eq!(ex.downcast_mut::<i64>(), None);
        assert_eq!(*ex.downcast::<i32>().unwrap(), 6);
    }

    #[test]
    fn into_payload_is_lossless() {
        let payload = caught(vec![1_u8, 2, 3]).into_payload();
        assert_eq!(payload.downcast_ref::<Vec<u8>>().unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn formatting() {
        let ex = caught("boom");
        assert_eq!(ex.to_string(), "boom");
        assert_eq!(format!("{ex:?}"), r#"CaughtException { message: "boom" }"#);
    }

    #[test]
    fn resume_keeps_payload() {
        let result = ActiveBackend::intercept(|| {
            caught(String::from("again")).resume();
        });
        assert_eq!(result.unwrap_err().downcast_ref::<String>().unwrap(), "again");
    }

    #[test]
    fn usable_as_error() {
        fn run() -> Result<(), Box<dyn std::error::Error>> {
            let result: Result<(), CaughtException> = Err(caught("boom"));
            result?;
            Ok(())
        }
        assert_eq!(run().unwrap_err().to_string(), "boom");
    }
}
