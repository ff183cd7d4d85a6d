//! Interruption handler.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/interruption_test.rs"]
mod interruption_test;

use evrp_core::prelude::*;
use evrp_core::alns::utils::TimeQuota;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// The Ctrl-C handler can be installed only once per process.
static INTERRUPTION_FLAG: Mutex<Option<Arc<AtomicBool>>> = Mutex::new(None);

/// Creates interruption quota which is reached on Ctrl-C or when optional time limit is exceeded.
pub fn create_interruption_quota(max_time: Option<usize>) -> GenericResult<Arc<dyn Quota + Send + Sync>> {
    let inner = max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as Float)));
    let should_interrupt = get_interruption_flag()?;

    Ok(Arc::new(InterruptionQuota { inner, should_interrupt }))
}

fn get_interruption_flag() -> GenericResult<Arc<AtomicBool>> {
    let mut flag = INTERRUPTION_FLAG.lock().map_err(|_| "interruption flag is poisoned")?;

    if let Some(flag) = flag.as_ref() {
        return Ok(flag.clone());
    }

    let should_interrupt = Arc::new(AtomicBool::new(false));
    ctrlc::set_handler({
        let should_interrupt = should_interrupt.clone();
        move || {
            should_interrupt.store(true, Ordering::Relaxed);
        }
    })
    .map_err(|err| format!("cannot set interruption handler: '{err}'"))?;

    *flag = Some(should_interrupt.clone());

    Ok(should_interrupt)
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota + Send + Sync>>,
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached()) || self.should_interrupt.load(Ordering::Relaxed)
    }
}
