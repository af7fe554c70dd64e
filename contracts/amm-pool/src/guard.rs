use crate::storage::{is_locked, set_locked};
use amm_types::AmmError;
use soroban_sdk::Env;

/// Run a mutating operation with the operation-in-progress flag held
///
/// The flag is cleared on every exit path. A failed operation is rolled back
/// by the host together with everything else it wrote.
pub fn non_reentrant<T>(
    env: &Env,
    op: impl FnOnce() -> Result<T, AmmError>,
) -> Result<T, AmmError> {
    if is_locked(env) {
        return Err(AmmError::Reentrancy);
    }

    set_locked(env, true);
    let result = op();
    set_locked(env, false);
    result
}
