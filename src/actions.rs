//! Mutation Settlement
//!
//! Every create/update/delete ends here: a failure is shown once in the
//! error dialog and the list is refetched either way.

use crate::cache::Revalidate;
use crate::context::ErrorSink;
use crate::error::ApiError;

pub fn settle<T>(
    action: &str,
    result: Result<T, ApiError>,
    errors: &impl ErrorSink,
    cache: &impl Revalidate,
) -> Option<T> {
    let value = match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{} failed: {}", action, err.detail());
            errors.show_error(err.to_string());
            None
        }
    };
    cache.invalidate();
    value
}

/// Finish a PUT. `Ok(false)` means nothing was sent, so there is nothing to
/// report or refetch. A failure undoes the optimistic row state.
pub fn finish_update(
    result: Result<bool, ApiError>,
    errors: &impl ErrorSink,
    cache: &impl Revalidate,
    rollback: impl FnOnce(),
) {
    if let Ok(false) = result {
        return;
    }
    if settle("update", result, errors, cache).is_none() {
        rollback();
    }
}

/// Finish a POST. The composer is emptied whether or not it succeeded.
pub fn finish_create<T>(
    result: Result<T, ApiError>,
    errors: &impl ErrorSink,
    cache: &impl Revalidate,
    clear_draft: impl FnOnce(),
) {
    settle("create", result, errors, cache);
    clear_draft();
}

/// OK on the error dialog: close the dialog, then empty the channel.
pub fn acknowledge(errors: &impl ErrorSink, close_dialog: impl FnOnce()) {
    close_dialog();
    errors.close_error();
}
