use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use verity_core::{ErrorKind, Value};

/// Runs `func` and returns what it raised, if anything. A panic counts as a
/// raise and surfaces as an `Error` carrying the panic text.
pub(crate) fn observe<T>(func: impl FnOnce() -> Result<T, Value>) -> Option<Value> {
    match panic::catch_unwind(AssertUnwindSafe(func)) {
        Ok(Ok(_)) => None,
        Ok(Err(raised)) => Some(raised),
        Err(payload) => Some(panic_value(payload)),
    }
}

/// Drives `future` to completion and returns what it raised, if anything.
pub(crate) async fn observe_async<T>(future: impl Future<Output = Result<T, Value>>) -> Option<Value> {
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(_)) => None,
        Ok(Err(raised)) => Some(raised),
        Err(payload) => Some(panic_value(payload)),
    }
}

fn panic_value(payload: Box<dyn Any + Send>) -> Value {
    let message = match payload.downcast::<String>() {
        Ok(text) => *text,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(text) => (*text).to_string(),
            Err(_) => "panicked".to_string(),
        },
    };
    Value::error(ErrorKind::Error, message)
}
