use super::{Backend, Payload};
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

pub(crate) struct ActiveBackend;

impl Backend for ActiveBackend {
    #[inline]
    fn throw(payload: Payload) -> ! {
        resume_unwind(payload);
    }

    #[inline]
    fn intercept<Func: FnOnce() -> R, R>(func: Func) -> Result<R, Payload> {
        catch_unwind(AssertUnwindSafe(func))
    }
}
