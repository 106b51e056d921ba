mod common;

use surveyrun_core::config::AppConfig;
use surveyrun_core::scheduler;
use surveyrun_core::task::TaskSpec;

#[tokio::test]
async fn summary_partitions_by_outcome() {
    let dir = tempfile::tempdir().unwrap();

    let mut tasks = Vec::new();
    for i in 0..4 {
        let script = common::write_script(dir.path(), &format!("unit{i}.sh"), "exit 0");
        tasks.push(TaskSpec::new(script.to_string_lossy()));
    }
    let missing = dir.path().join("missing.sh");
    tasks.push(TaskSpec::new(missing.to_string_lossy()));

    let cfg = AppConfig {
        runner: common::test_runner_config(),
        tasks,
        ..Default::default()
    };

    let summary = scheduler::run_all(&cfg).await;

    assert_eq!(summary.total(), 5);
    assert_eq!(summary.succeeded.len(), 4);
    assert_eq!(summary.failed, vec![missing.to_string_lossy().into_owned()]);
    assert!(!summary.all_succeeded());
}

#[tokio::test]
async fn failing_script_does_not_disturb_siblings() {
    let dir = tempfile::tempdir().unwrap();

    let good_a = common::write_script(dir.path(), "good_a.sh", "exit 0");
    let bad = common::write_script(dir.path(), "bad.sh", "echo boom >&2\nexit 1");
    let good_b = common::write_script(dir.path(), "good_b.sh", "exit 0");

    let cfg = AppConfig {
        runner: common::test_runner_config(),
        tasks: vec![
            TaskSpec::new(good_a.to_string_lossy()),
            TaskSpec::new(bad.to_string_lossy()),
            TaskSpec::new(good_b.to_string_lossy()),
        ],
        ..Default::default()
    };

    let summary = scheduler::run_all(&cfg).await;

    assert_eq!(summary.failed, vec![bad.to_string_lossy().into_owned()]);
    let mut succeeded = summary.succeeded.clone();
    succeeded.sort();
    let mut expected = vec![
        good_a.to_string_lossy().into_owned(),
        good_b.to_string_lossy().into_owned(),
    ];
    expected.sort();
    assert_eq!(succeeded, expected);
}

#[tokio::test]
async fn single_worker_pool_still_completes_everything() {
    let dir = tempfile::tempdir().unwrap();

    let mut tasks = Vec::new();
    for i in 0..3 {
        let script = common::write_script(dir.path(), &format!("serial{i}.sh"), "exit 0");
        tasks.push(TaskSpec::new(script.to_string_lossy()));
    }

    let mut runner = common::test_runner_config();
    runner.workers = 1;
    let cfg = AppConfig {
        runner,
        tasks,
        ..Default::default()
    };

    let summary = scheduler::run_all(&cfg).await;

    assert_eq!(summary.succeeded.len(), 3);
    assert!(summary.all_succeeded());
}
