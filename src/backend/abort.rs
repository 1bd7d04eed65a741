use super::{Backend, Payload};

pub(crate) struct ActiveBackend;

impl Backend for ActiveBackend {
    #[cold]
    fn throw(_payload: Payload) -> ! {
        eprintln!(
            "A tryblock exception was thrown, but unwinding is disabled (panic = \"abort\"). The process will now terminate.",
        );
        std::process::abort();
    }

    // A panicking `func` aborts the process before control gets back here.
    #[inline]
    fn intercept<Func: FnOnce() -> R, R>(func: Func) -> Result<R, Payload> {
        Ok(func())
    }
}
