use super::test_utilities::{MockQueueService, config_for, queue_url};
use sqsutil::error::EXIT_SEND_FAILURE;
use sqsutil::SqsUtilError;
use sqsutil_client::send_to_destinations;

#[test_log::test(tokio::test)]
async fn test_send_resolves_then_sends() {
    let service = MockQueueService::with_queues(&["orders"]);
    let config = config_for("orders");
    let message = config.message("hello world");

    let receipts = send_to_destinations(&service, &config, &message)
        .await
        .unwrap();

    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].queue_name, "orders");
    assert_eq!(receipts[0].queue_url, queue_url("orders"));
    assert_eq!(receipts[0].message_id.as_deref(), Some("msg-1"));

    assert_eq!(
        service.lookups(),
        vec![("orders".to_string(), "123456789012".to_string())]
    );
    let sent = service.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, queue_url("orders"));
    assert_eq!(sent[0].1.body, "hello world");
    assert_eq!(sent[0].1.delay_seconds, 1);
    assert_eq!(sent[0].1.attributes["hello"], "big world");
}

#[test_log::test(tokio::test)]
async fn test_send_to_multiple_destinations_in_order() {
    let service = MockQueueService::with_queues(&["vault-register", "consul-register"]);
    let config = config_for("vault-register consul-register");
    let message = config.message("register");

    let receipts = send_to_destinations(&service, &config, &message)
        .await
        .unwrap();

    let names: Vec<_> = receipts.iter().map(|r| r.queue_name.as_str()).collect();
    assert_eq!(names, vec!["vault-register", "consul-register"]);
    assert_eq!(service.sent().len(), 2);
}

#[test_log::test(tokio::test)]
async fn test_lookup_failure_aborts_before_send() {
    let service = MockQueueService::with_queues(&["orders"]);
    let config = config_for("missing orders");
    let message = config.message("hello");

    let err = send_to_destinations(&service, &config, &message)
        .await
        .unwrap_err();

    assert!(matches!(err, SqsUtilError::QueueLookup { ref queue, .. } if queue == "missing"));
    assert_eq!(err.exit_code(), EXIT_SEND_FAILURE);
    assert_eq!(service.lookups().len(), 1);
    assert!(service.sent().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_send_failure_stops_remaining_destinations() {
    let service =
        MockQueueService::with_queues(&["first", "second", "third"]).failing_send_to("second");
    let config = config_for("first second third");
    let message = config.message("hello");

    let err = send_to_destinations(&service, &config, &message)
        .await
        .unwrap_err();

    assert!(matches!(err, SqsUtilError::SendFailed { .. }));
    assert!(!err.is_client_error());
    assert_eq!(service.sent().len(), 1);
    assert_eq!(service.lookups().len(), 2);
}
