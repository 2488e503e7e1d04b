//! Recovering error-typed panics for debugging.
//!
//! A panic raised with an error payload (`std::panic::panic_any(err)`) can be
//! caught, printed with [`DebugPrinter`], and either handed back to the
//! caller or re-raised. Panics whose payload is not an error always keep
//! unwinding untouched.

use std::any::Any;
use std::error::Error;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};
use trackerr_core::{SharedError, Trackable};

use crate::DebugPrinter;

type Payload = Box<dyn Any + Send + 'static>;

/// Convert a panic payload into an error, or give it back unchanged.
///
/// Recognised payloads are [`Trackable`], [`SharedError`], and
/// `Box<dyn Error + Send + Sync>`.
pub fn payload_to_error(payload: Payload) -> Result<SharedError, Payload> {
    let payload = match payload.downcast::<Trackable>() {
        Ok(trackable) => return Ok((*trackable).into_shared()),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<SharedError>() {
        Ok(shared) => return Ok(*shared),
        Err(payload) => payload,
    };
    match payload.downcast::<Box<dyn Error + Send + Sync>>() {
        Ok(boxed) => Ok(Arc::from(*boxed)),
        Err(payload) => Err(payload),
    }
}

impl<W: Write> DebugPrinter<W> {
    /// Run `f`, printing and recovering any error-typed panic it raises.
    ///
    /// - No panic: returns `Some` with the result of `f`.
    /// - Error payload with `catch` given: prints the trace, stores the error
    ///   in `catch`, and returns `None`.
    /// - Error payload without `catch`: prints the trace, then resumes
    ///   unwinding with the error as payload.
    /// - Any other payload: resumes unwinding without printing.
    pub fn debug_panic<R>(
        &mut self,
        catch: Option<&mut Option<SharedError>>,
        f: impl FnOnce() -> R,
    ) -> Option<R> {
        let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => return Some(value),
            Err(payload) => payload,
        };

        let err = match payload_to_error(payload) {
            Ok(err) => err,
            Err(payload) => {
                debug!("panic payload is not an error, resuming");
                panic::resume_unwind(payload)
            }
        };

        if let Err(write_err) = self.print(Some(&*err as &(dyn Error + 'static))) {
            warn!(error = %write_err, "failed to print recovered panic");
        }

        match catch {
            Some(slot) => {
                debug!(error = %err, "recovered error panic");
                *slot = Some(err);
                None
            }
            None => panic::resume_unwind(Box::new(err)),
        }
    }
}

/// Run `f`, printing any error-typed panic to stdout.
///
/// See [`DebugPrinter::debug_panic`] for when the panic is recovered.
pub fn debug_panic<R>(
    catch: Option<&mut Option<SharedError>>,
    f: impl FnOnce() -> R,
) -> Option<R> {
    DebugPrinter::stdout().debug_panic(catch, f)
}
