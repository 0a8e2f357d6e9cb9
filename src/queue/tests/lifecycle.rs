//! Tests for queue shutdown and handle lifetimes

#[cfg(test)]
mod tests {
    use crate::queue::api::{dynamic, QueueError};
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn test_exhaustion_is_sticky() {
        let (tx, mut rx, _stats) = dynamic::<u64>(4);

        tx.send(7).await.unwrap();
        tx.close();

        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(rx.recv().await, None);
        assert_eq!(rx.recv().await, None, "exhaustion must be permanent");
    }

    #[tokio::test]
    async fn test_stats_reads_fail_permanently_after_shutdown() {
        let (tx, mut rx, stats) = dynamic::<u64>(4);

        tx.send(1).await.unwrap();
        tx.close();
        while rx.recv().await.is_some() {}

        // the coordinator has exited; the failure mode never changes
        for _ in 0..3 {
            assert_eq!(stats.read().await, Err(QueueError::Closed));
        }
        assert_eq!(
            stats.read_timeout(Duration::from_millis(50)).await,
            Err(QueueError::Closed),
            "a dead coordinator reports Closed, not Cancelled"
        );
    }

    #[tokio::test]
    async fn test_queue_keeps_serving_stats_while_undrained() {
        let (tx, rx, stats) = dynamic::<u64>(4);

        for i in 0..3 {
            tx.send(i).await.unwrap();
        }
        tx.close();
        // the receiver goes away without draining; buffered values remain,
        // so the coordinator stays up for the remaining observers
        drop(rx);

        let snapshot = timeout(Duration::from_secs(5), stats.read())
            .await
            .expect("stats must still be served")
            .unwrap();
        assert_eq!(snapshot.len, 3);
        assert_eq!(snapshot.enqueued, 3);
        assert_eq!(snapshot.dequeued, 0);
    }

    #[tokio::test]
    async fn test_cloned_stats_readers_share_the_queue() {
        let (tx, mut rx, stats) = dynamic::<u64>(4);
        let other = stats.clone();

        tx.send(5).await.unwrap();

        let a = stats.read().await.unwrap();
        let b = other.read().await.unwrap();
        assert_eq!(a.enqueued, 1);
        assert_eq!(b.enqueued, 1);
        // the clone's read is counted like any other
        assert_eq!(b.stats_reads, a.stats_reads + 1);

        tx.close();
        assert_eq!(rx.recv().await, Some(5));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_receiver_parked_across_close_is_released() {
        let (tx, mut rx, _stats) = dynamic::<u64>(4);

        let consumer = tokio::spawn(async move { rx.recv().await });

        // let the consumer park on the empty buffer, then close without
        // ever sending anything
        tokio::time::sleep(Duration::from_millis(20)).await;
        tx.close();

        let result = timeout(Duration::from_secs(5), consumer)
            .await
            .expect("parked consumer must be released by the close")
            .unwrap();
        assert_eq!(result, None);
    }
}
