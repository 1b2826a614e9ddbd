use crate::core::random::RandomGenerator;
use crate::domain::model::DelayResult;
use crate::utils::error::{Result, RosterError};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::task::{Id, JoinSet};

/// Completes after `delay_ms` with `Operation {id} completed in {delay_ms}ms`.
pub async fn simulate_delay(id: u32, delay_ms: u64) -> Result<DelayResult> {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    tracing::debug!("Operation {} finished after {}ms", id, delay_ms);
    Ok(DelayResult::new(id, delay_ms))
}

/// Picks a random delay for each of `count` operations, numbered from 1.
pub fn plan_operations(
    rng: &mut RandomGenerator,
    count: usize,
    min_ms: i64,
    max_ms: i64,
) -> Result<Vec<(u32, u64)>> {
    let count = u32::try_from(count).map_err(|_| RosterError::InvalidConfigValueError {
        field: "operations.count".to_string(),
        value: count.to_string(),
        reason: format!("At most {} operations are supported", u32::MAX),
    })?;

    (1..=count)
        .map(|id| {
            let delay = rng.random_int(min_ms, max_ms)?;
            let delay = u64::try_from(delay).map_err(|_| RosterError::InvalidConfigValueError {
                field: "operations.delay_ms".to_string(),
                value: delay.to_string(),
                reason: "Delay cannot be negative".to_string(),
            })?;
            Ok((id, delay))
        })
        .collect()
}

/// Starts every task at once and waits for all of them.
///
/// Results come back in submission order. The first failure aborts the
/// remaining tasks and is returned as-is; a panicking or cancelled task
/// becomes [`RosterError::TaskFailed`] carrying its submission index.
pub async fn run_concurrently<T, F>(tasks: Vec<F>) -> Result<Vec<T>>
where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    let total = tasks.len();
    let mut join_set = JoinSet::new();
    let mut indices: HashMap<Id, usize> = HashMap::with_capacity(total);

    for (index, task) in tasks.into_iter().enumerate() {
        let handle = join_set.spawn(task);
        indices.insert(handle.id(), index);
    }

    let mut slots: Vec<Option<T>> = (0..total).map(|_| None).collect();
    // 每個 Id 都在 spawn 時登記過
    let index_of = |id: Id| indices.get(&id).copied().unwrap_or(total);

    while let Some(joined) = join_set.join_next_with_id().await {
        let (index, outcome) = match joined {
            Ok((id, outcome)) => (index_of(id), outcome),
            Err(e) => {
                let task = index_of(e.id());
                tracing::warn!("Task {} did not finish: {}", task, e);
                join_set.abort_all();
                return Err(RosterError::TaskFailed {
                    task,
                    message: e.to_string(),
                });
            }
        };

        match outcome {
            Ok(value) => slots[index] = Some(value),
            Err(e) => {
                tracing::warn!("Task {} failed, aborting {} pending", index, join_set.len());
                join_set.abort_all();
                return Err(e);
            }
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| RosterError::TaskFailed {
                task: index,
                message: "task produced no result".to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::pin::Pin;
    use std::time::Instant;

    type BoxedTask = Pin<Box<dyn Future<Output = Result<DelayResult>> + Send>>;

    async fn failing_operation() -> Result<DelayResult> {
        Err(RosterError::TaskFailed {
            task: 1,
            message: "boom".to_string(),
        })
    }

    async fn exploding_operation() -> Result<DelayResult> {
        panic!("task exploded")
    }

    #[tokio::test]
    async fn test_simulate_delay_message() {
        let result = simulate_delay(7, 1).await.unwrap();
        assert_eq!(result.id, 7);
        assert_eq!(result.delay_ms, 1);
        assert_eq!(result.message, "Operation 7 completed in 1ms");
    }

    #[tokio::test]
    async fn test_results_follow_submission_order() {
        let tasks = vec![simulate_delay(1, 40), simulate_delay(2, 5)];
        let results = tokio_test::assert_ok!(run_concurrently(tasks).await);

        let ids: Vec<u32> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_tasks_run_concurrently() {
        let started = Instant::now();
        let tasks = vec![
            simulate_delay(1, 100),
            simulate_delay(2, 100),
            simulate_delay(3, 100),
        ];
        let results = run_concurrently(tasks).await.unwrap();

        assert_eq!(results.len(), 3);
        // 串行執行至少要 300ms
        assert!(started.elapsed() < Duration::from_millis(280));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let tasks: Vec<BoxedTask> = Vec::new();
        let results = run_concurrently(tasks).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_first_failure_fails_batch() {
        let tasks: Vec<BoxedTask> = vec![
            Box::pin(simulate_delay(1, 500)),
            Box::pin(failing_operation()),
        ];

        let started = Instant::now();
        let err = run_concurrently(tasks).await.unwrap_err();

        assert!(matches!(err, RosterError::TaskFailed { ref message, .. } if message == "boom"));
        assert!(started.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_panicking_task_reported_as_failure() {
        let tasks: Vec<BoxedTask> = vec![
            Box::pin(simulate_delay(1, 200)),
            Box::pin(exploding_operation()),
            Box::pin(simulate_delay(3, 200)),
        ];
        let err = tokio_test::assert_err!(run_concurrently(tasks).await);
        match err {
            RosterError::TaskFailed { task, message } => {
                assert_eq!(task, 1);
                assert!(message.contains("panic"));
            }
            other => panic!("expected TaskFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_operations_numbering_and_bounds() {
        let mut rng = RandomGenerator::with_seed(8);
        let plan = plan_operations(&mut rng, 3, 500, 1500).unwrap();

        assert_eq!(plan.len(), 3);
        for (expected_id, (id, delay)) in (1u32..).zip(plan) {
            assert_eq!(id, expected_id);
            assert!((500..=1500).contains(&delay));
        }
    }

    #[test]
    fn test_plan_operations_rejects_bad_range() {
        let mut rng = RandomGenerator::with_seed(8);
        assert!(matches!(
            plan_operations(&mut rng, 2, 10, 1),
            Err(RosterError::InvalidRange { min: 10, max: 1 })
        ));
        match plan_operations(&mut rng, 2, -10, -1) {
            Err(RosterError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "operations.delay_ms");
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_operations_rejects_oversized_count() {
        let mut rng = RandomGenerator::with_seed(8);
        match plan_operations(&mut rng, u32::MAX as usize + 1, 1, 2) {
            Err(RosterError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "operations.count");
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }
}
