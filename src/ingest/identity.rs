use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Last issued time-based id. Forcing each new id strictly above this value
// keeps bursts within the same millisecond from colliding.
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Returns the definitive id for a document.
///
/// A present, non-empty caller-supplied id is returned unchanged. Otherwise a
/// time-based id is minted: epoch milliseconds, bumped past the previously
/// issued value when the clock has not advanced. Uniqueness is local to this
/// process; no check is made against ids already in the engine.
pub fn assign_id(supplied: Option<&str>) -> String {
    match supplied {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => next_id().to_string(),
    }
}

fn next_id() -> u64 {
    let now = now_ms();
    let mut prev = LAST_ISSUED.load(Ordering::SeqCst);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_ISSUED.compare_exchange(prev, candidate, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return candidate,
            Err(actual) => prev = actual,
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}
