//! Tests for the batch orchestrator.
//!
//! Unix-only cases use small /bin/sh scripts as stand-ins for the external
//! converter so the full spawn/exit-code path is exercised.

use super::*;
use crate::models::{BatchEvent, ConversionRequest, ParameterSet};
use std::fs::File;
use std::path::PathBuf;
use tempfile::TempDir;

fn request(input: PathBuf) -> ConversionRequest {
    ConversionRequest::new(input, ParameterSet::default())
}

#[cfg(unix)]
fn write_stub_tool(dir: &std::path::Path, name: &str, script: &str) -> PathBuf {
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let mut file = File::create(&path).expect("stub tool");
    file.write_all(script.as_bytes()).expect("stub script");
    let mut perms = file.metadata().expect("metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod");
    path
}

/// Stub converter that creates the file named after `--output` and exits 0.
#[cfg(unix)]
const OK_TOOL: &str = r#"#!/bin/sh
out=""
prev=""
for arg in "$@"; do
    if [ "$prev" = "--output" ]; then
        out="$arg"
    fi
    prev="$arg"
done
[ -n "$out" ] && : > "$out"
exit 0
"#;

#[cfg(unix)]
const FAILING_TOOL: &str = r#"#!/bin/sh
echo "unsupported image format" >&2
exit 3
"#;

#[test]
fn test_empty_batch_is_a_no_op() {
    let out_dir = TempDir::new().expect("out dir");
    let result = run_batch(std::path::Path::new("vtracer"), &[], out_dir.path());

    assert_eq!(result, crate::models::BatchResult::default());
    assert_eq!(
        std::fs::read_dir(out_dir.path()).expect("read dir").count(),
        0
    );
}

#[cfg(unix)]
#[test]
fn test_missing_input_never_spawns_the_tool() {
    let dir = TempDir::new().expect("dir");
    // Stub that leaves a marker behind if it ever runs.
    let tool = write_stub_tool(
        dir.path(),
        "marker-tool",
        "#!/bin/sh\n: > \"$(dirname \"$0\")/invoked\"\nexit 0\n",
    );
    let out_dir = TempDir::new().expect("out dir");

    let requests = [request(dir.path().join("missing.png"))];
    let result = run_batch(&tool, &requests, out_dir.path());

    assert_eq!(result.failed, 1);
    assert_eq!(result.total, 1);
    assert!(!dir.path().join("invoked").exists());
}

#[cfg(unix)]
#[test]
fn test_partial_failure_batch() {
    let dir = TempDir::new().expect("dir");
    let tool = write_stub_tool(dir.path(), "ok-tool", OK_TOOL);
    let out_dir = TempDir::new().expect("out dir");

    File::create(dir.path().join("a.png")).expect("input fixture");
    let requests = [
        request(dir.path().join("a.png")),
        request(dir.path().join("missing.png")),
    ];

    let result = run_batch(&tool, &requests, out_dir.path());

    assert_eq!(result.successful, 1);
    assert_eq!(result.failed, 1);
    assert_eq!(result.total, 2);
    assert!(out_dir.path().join("1.svg").exists());
}

#[cfg(unix)]
#[test]
fn test_every_request_yields_one_outcome() {
    let dir = TempDir::new().expect("dir");
    let tool = write_stub_tool(dir.path(), "ok-tool", OK_TOOL);
    let out_dir = TempDir::new().expect("out dir");

    for name in ["a.png", "b.png", "c.png"] {
        File::create(dir.path().join(name)).expect("input fixture");
    }
    let requests = [
        request(dir.path().join("a.png")),
        request(dir.path().join("missing.png")),
        request(dir.path().join("b.png")),
        request(dir.path().join("c.png")),
    ];

    let mut events = Vec::new();
    let result = run_batch_with(&tool, &requests, out_dir.path(), |event| events.push(event));

    assert_eq!(result.successful + result.failed, result.total);
    assert_eq!(result.total, requests.len());
    assert_eq!(events.len(), requests.len() * 2);

    // Events come in Started/Completed pairs, in input order.
    for (i, pair) in events.chunks(2).enumerate() {
        match &pair[0] {
            BatchEvent::Started { index, total, .. } => {
                assert_eq!(*index, i + 1);
                assert_eq!(*total, requests.len());
            }
            other => panic!("expected Started, got {:?}", other),
        }
        match &pair[1] {
            BatchEvent::Completed { index, .. } => assert_eq!(*index, i + 1),
            other => panic!("expected Completed, got {:?}", other),
        }
    }

    // Successful outputs were numbered consecutively as the batch advanced.
    assert!(out_dir.path().join("1.svg").exists());
    assert!(out_dir.path().join("2.svg").exists());
    assert!(out_dir.path().join("3.svg").exists());
    assert!(!out_dir.path().join("4.svg").exists());
}

#[cfg(unix)]
#[test]
fn test_explicit_output_is_respected() {
    let dir = TempDir::new().expect("dir");
    let tool = write_stub_tool(dir.path(), "ok-tool", OK_TOOL);
    let out_dir = TempDir::new().expect("out dir");

    File::create(dir.path().join("a.png")).expect("input fixture");
    let requests = [ConversionRequest {
        input: dir.path().join("a.png"),
        output: Some(out_dir.path().join("custom.svg")),
        params: ParameterSet::default(),
    }];

    let result = run_batch(&tool, &requests, out_dir.path());

    assert_eq!(result.successful, 1);
    assert!(out_dir.path().join("custom.svg").exists());
    assert!(!out_dir.path().join("1.svg").exists());
}

#[cfg(unix)]
#[test]
fn test_tool_failure_carries_stderr() {
    let dir = TempDir::new().expect("dir");
    let tool = write_stub_tool(dir.path(), "failing-tool", FAILING_TOOL);
    let out_dir = TempDir::new().expect("out dir");

    File::create(dir.path().join("a.png")).expect("input fixture");
    let requests = [request(dir.path().join("a.png"))];

    let mut reasons = Vec::new();
    let result = run_batch_with(&tool, &requests, out_dir.path(), |event| {
        if let BatchEvent::Completed {
            outcome: crate::models::ConversionOutcome::Failure { reason, .. },
            ..
        } = event
        {
            reasons.push(reason);
        }
    });

    assert_eq!(result.failed, 1);
    assert_eq!(reasons.len(), 1);
    assert!(reasons[0].contains("exit code 3"));
    assert!(reasons[0].contains("unsupported image format"));
}

#[test]
fn test_unreadable_output_dir_is_a_per_file_failure() {
    let dir = TempDir::new().expect("dir");
    File::create(dir.path().join("a.png")).expect("input fixture");

    let requests = [request(dir.path().join("a.png"))];
    let missing_out = dir.path().join("no-such-dir");
    let result = run_batch(std::path::Path::new("vtracer"), &requests, &missing_out);

    assert_eq!(result.failed, 1);
    assert_eq!(result.total, 1);
}
