use std::future::Future;

/// Apply a local mutation, run the remote call, and undo the mutation if the
/// call fails.
///
/// `mutate_local` runs synchronously before the call is awaited and returns
/// whatever `revert_local` needs to undo it (for a delete, the removed row and
/// its index). On success the undo token is dropped.
///
/// The helper does not lock anything: a concurrent edit that lands between the
/// mutation and the revert is overwritten in response-arrival order.
pub async fn perform_optimistic<U, T, E, Fut>(
    mutate_local: impl FnOnce() -> U,
    remote_call: Fut,
    revert_local: impl FnOnce(U),
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    let undo = mutate_local();
    match remote_call.await {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!("remote call failed, reverting local change");
            revert_local(undo);
            Err(e)
        }
    }
}
