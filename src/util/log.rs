use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use std::time::{Duration, Instant};

static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns true if nothing has been logged from `location` within the last `interval`, and
/// records the current time for it if so. A poisoned lock always allows logging.
pub fn should_log(location: &str, interval: Duration) -> bool {
    let Ok(mut last_log) = LAST_LOG.lock() else {
        return true;
    };
    if last_log
        .get(location)
        .is_some_and(|then| then.elapsed() < interval)
    {
        return false;
    }
    last_log.insert(location.to_string(), Instant::now());
    true
}

#[macro_export]
macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        if $crate::util::log::should_log(
            &$crate::util::assert::current_location!(),
            ::std::time::Duration::from_secs($seconds),
        ) {
            $crate::core::prelude::warn!($($args),+);
        }
    }
}

#[macro_export]
macro_rules! info_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        if $crate::util::log::should_log(
            &$crate::util::assert::current_location!(),
            ::std::time::Duration::from_secs($seconds),
        ) {
            $crate::core::prelude::info!($($args),+);
        }
    }
}
