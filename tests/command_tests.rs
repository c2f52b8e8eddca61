use std::io::Write;
use tempfile::NamedTempFile;
use trace_compactor::commands::{read_input, run_compact, validate_args, CompactArgs, InputSource};

const DJANGO_TRACEBACK: &str = r#"Internal Server Error: /api/users/
Traceback (most recent call last):
  File "/usr/local/lib/python3.11/site-packages/django/core/handlers/exception.py", line 55, in inner
    response = get_response(request)
  File "/usr/local/lib/python3.11/site-packages/django/core/handlers/base.py", line 197, in _get_response
    response = wrapped_callback(request, *callback_args, **callback_kwargs)
  File "/home/user/myapp/api/views.py", line 45, in user_list
    users = User.objects.filter(active=True)
  File "/home/user/myapp/api/models.py", line 20, in filter
    return self.get_queryset().filter(*args, **kwargs)
  File "/usr/local/lib/python3.11/site-packages/django/db/models/query.py", line 1000, in filter
    return self._filter_or_exclude(False, *args, **kwargs)
AttributeError: 'NoneType' object has no attribute 'filter'"#;

#[test]
fn test_validate_args_requires_source() {
    assert!(validate_args(&CompactArgs::default()).is_err());

    let args = CompactArgs {
        stdin: true,
        ..Default::default()
    };
    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_run_compact_plain_text_unchanged() {
    let text = "This is just plain text without any Python tracebacks.";
    let output = run_compact(text, &CompactArgs::default()).unwrap();

    assert_eq!(output, text);
}

#[test]
fn test_run_compact_django_traceback() {
    let args = CompactArgs {
        stdin: true,
        max_frames: 3,
        project_root: Some("/home/user/myapp".to_string()),
        ..Default::default()
    };

    let output = run_compact(DJANGO_TRACEBACK, &args).unwrap();

    assert!(output.starts_with("Internal Server Error: /api/users/\n"));
    assert!(output.contains("views.py"));
    assert!(output.contains("models.py"));
    assert!(!output.contains("exception.py"));
    assert!(output.len() < DJANGO_TRACEBACK.len());
}

#[test]
fn test_run_compact_json_report() {
    let text = "Some text\nTraceback (most recent call last):\n  File \"test.py\", line 1, in <module>\n    x = 1/0\nZeroDivisionError: division by zero";
    let args = CompactArgs {
        stdin: true,
        json: true,
        ..Default::default()
    };

    let output = run_compact(text, &args).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(report["original_preview"], text);
    assert!(report["compacted_preview"]
        .as_str()
        .unwrap()
        .contains("<COMPACT_PY_TRACEBACK"));
    assert_eq!(report["frames_found"], 0);
}

#[test]
fn test_json_preview_is_truncated() {
    let text = "x".repeat(1000);
    let args = CompactArgs {
        json: true,
        ..Default::default()
    };

    let output = run_compact(&text, &args).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(report["original_preview"].as_str().unwrap().chars().count(), 400);
    assert_eq!(report["compacted_preview"].as_str().unwrap().chars().count(), 400);
}

#[test]
fn test_read_input_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "Traceback (most recent call last):\n  File \"test.py\", line 1, in <module>\n    raise RuntimeError(\"test\")\nRuntimeError: test"
    )
    .unwrap();

    let source = InputSource::File(file.path().to_path_buf());
    let text = read_input(&source).unwrap();
    let output = run_compact(&text, &CompactArgs::default()).unwrap();

    assert!(output.contains("<COMPACT_PY_TRACEBACK"));
    assert!(output.contains("Exception: RuntimeError: test"));
}

#[test]
fn test_read_input_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = InputSource::File(dir.path().join("missing.txt"));

    assert!(read_input(&source).is_err());
}

#[test]
fn test_run_compact_async_traceback() {
    let text = r#"Traceback (most recent call last):
  File "main.py", line 20, in <module>
    asyncio.run(main())
  File "/usr/lib/python3.11/asyncio/runners.py", line 190, in run
    return runner.run(main)
  File "/home/user/app/handlers.py", line 50, in handle_request
    result = await process_data(data)
  File "/home/user/app/processor.py", line 30, in process_data
    return await fetch_from_db(data['id'])
KeyError: 'id'"#;
    let args = CompactArgs {
        stdin: true,
        project_root: Some("/home/user/app".to_string()),
        ..Default::default()
    };

    let output = run_compact(text, &args).unwrap();

    assert!(output.contains("handlers.py"));
    assert!(output.contains("processor.py"));
    assert!(output.contains("Exception: KeyError: 'id'"));
}
