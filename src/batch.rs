//! Fail-fast fan-out/fan-in over fallible futures.
//!
//! Members are polled concurrently on the calling task, so there is no
//! multi-threaded execution and no shared state between them. The first
//! error wins: it is returned immediately and the unfinished members are
//! dropped, which cancels their outstanding requests.

use futures::future::{try_join, try_join_all};
use std::future::Future;

/// Await every future in `futures`, returning their outputs in input order.
pub async fn fan_in<I, F, T, E>(futures: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    try_join_all(futures).await
}

/// Await two futures of different output types.
pub async fn fan_in_pair<A, B, TA, TB, E>(a: A, b: B) -> Result<(TA, TB), E>
where
    A: Future<Output = Result<TA, E>>,
    B: Future<Output = Result<TB, E>>,
{
    try_join(a, b).await
}
