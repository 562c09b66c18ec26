use netwalk_core::{AddressStream, Termination};
use std::net::Ipv4Addr;
use std::time::Duration;
use tokio::runtime::Handle;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

async fn stop(mut stream: AddressStream<Ipv4Addr>) -> Option<Termination> {
    stream.close();
    tokio::time::timeout(SHUTDOWN_GRACE, stream.shutdown())
        .await
        .expect("producer outlived its stream")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn many_streams_closed_immediately_leave_no_producers() {
    let mut streams = Vec::new();
    for i in 0..2_000u32 {
        let base = Ipv4Addr::from(i << 12);
        streams.push(netwalk_core::enumerate(base, 16).unwrap());
    }

    for stream in streams {
        let exit = stop(stream).await;
        assert!(
            matches!(
                exit,
                Some(Termination::Cancelled | Termination::Disconnected)
            ),
            "unexpected exit {exit:?}"
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn partial_drain_then_close() {
    let mut stream = netwalk_core::enumerate(Ipv4Addr::new(192, 168, 1, 2), 24).unwrap();
    for last in 0..4u8 {
        assert_eq!(stream.next().await, Some(Ipv4Addr::new(192, 168, 1, last)));
    }

    let exit = stop(stream).await;
    assert_ne!(exit, Some(Termination::Exhausted));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_streams_stay_ordered() {
    let mut handles = Vec::new();
    for octet in 0..8u8 {
        handles.push(tokio::spawn(async move {
            let mut stream = netwalk_core::enumerate(Ipv4Addr::new(10, octet, 0, 0), 23).unwrap();
            let mut previous: Option<u32> = None;
            let mut count: usize = 0;
            while let Some(addr) = stream.next().await {
                let value = u32::from(addr);
                if let Some(previous) = previous {
                    assert_eq!(value, previous + 1);
                }
                previous = Some(value);
                count += 1;
            }
            count
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 512);
    }
}

#[test]
fn blocking_consumer_outside_runtime() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut stream = {
        let _guard = runtime.enter();
        netwalk_core::enumerate(Ipv4Addr::new(10, 0, 0, 5), 30).unwrap()
    };

    let walked: Vec<Ipv4Addr> = stream.blocking_iter().collect();
    assert_eq!(
        walked,
        vec![
            Ipv4Addr::new(10, 0, 0, 4),
            Ipv4Addr::new(10, 0, 0, 5),
            Ipv4Addr::new(10, 0, 0, 6),
            Ipv4Addr::new(10, 0, 0, 7),
        ]
    );
    assert_eq!(stream.blocking_next(), None);

    let exit = runtime.block_on(stream.shutdown());
    assert_eq!(exit, Some(Termination::Exhausted));
}

#[tokio::test]
async fn dropped_stream_leaves_other_walks_running() {
    let stream = netwalk_core::enumerate(Ipv4Addr::new(10, 0, 0, 0), 8).unwrap();
    let mut other = netwalk_core::enumerate(Ipv4Addr::new(10, 0, 0, 0), 8).unwrap();
    drop(stream);

    assert_eq!(other.next().await, Some(Ipv4Addr::new(10, 0, 0, 0)));
    assert!(!other.is_finished());
    assert!(stop(other).await.is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dropping_streams_reclaims_producer_tasks() {
    let metrics = Handle::current().metrics();
    let before = metrics.num_alive_tasks();

    let mut streams = Vec::new();
    for i in 0..500u32 {
        let mut stream = netwalk_core::enumerate(Ipv4Addr::from(i << 16), 8).unwrap();
        if i % 2 == 0 {
            // Half of them are mid-walk when dropped.
            assert!(stream.next().await.is_some());
        }
        streams.push(stream);
    }
    assert!(metrics.num_alive_tasks() >= before + 500);

    drop(streams);
    tokio::time::timeout(SHUTDOWN_GRACE, async {
        while metrics.num_alive_tasks() > before {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("producer tasks outlived their streams");
}
