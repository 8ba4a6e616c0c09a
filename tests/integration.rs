use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use totxt::{
    DEFAULT_PREAMBLE, END_MARKER, IgnoreMatcher, Preamble, TotxtBuilder, TotxtError, assemble,
    totxt,
};
fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
#[test]
fn integration_byte_exact_artifact() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_file(&src.path().join("b.txt"), b"b");
    write_file(&src.path().join("a.txt"), b"a");
    write_file(&src.path().join("sub/c.txt"), b"c");
    let preamble = out.path().join("preamble.txt");
    fs::write(&preamble, "PRE").unwrap();
    let output = out.path().join("output.txt");
    let options = TotxtBuilder::new(src.path())
        .output(&output)
        .preamble_file(&preamble)
        .build();
    let summary = totxt(&options).unwrap();
    assert_eq!(summary.files, 3);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "PRE\n----\na.txt\na\n----\nb.txt\nb\n----\nsub/c.txt\nc\n--END--"
    );
}
#[test]
fn integration_custom_preamble_comes_first() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_file(&src.path().join("main.rs"), b"fn main() {}");
    let preamble = out.path().join("preamble.txt");
    fs::write(&preamble, "This is a test preamble.").unwrap();
    let output = out.path().join("output.txt");
    let options = TotxtBuilder::new(src.path())
        .output(&output)
        .preamble_file(&preamble)
        .build();
    totxt(&options).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    let header = text.find("----").unwrap();
    assert!(text[..header].contains("This is a test preamble."));
}
#[test]
fn integration_builtin_preamble() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let output = out.path().join("output.txt");
    let options = TotxtBuilder::new(src.path())
        .output(&output)
        .preamble_file("")
        .build();
    assert_eq!(options.preamble, Preamble::Builtin);
    assert!(DEFAULT_PREAMBLE.starts_with("The following text is a diretory structure with code."));
    assert!(DEFAULT_PREAMBLE.contains("--END-- are encounted."));
    assert!(DEFAULT_PREAMBLE.ends_with("directory as context."));
    totxt(&options).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!("{}\n{}", DEFAULT_PREAMBLE, END_MARKER)
    );
}
#[test]
fn integration_ignore_file_applies() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_file(&src.path().join(".totxtignore"), b".totxtignore\n*.log\nbuild\n");
    write_file(&src.path().join("app.log"), b"noise");
    write_file(&src.path().join("main.go"), b"package main");
    write_file(&src.path().join("build/app.log"), b"nested");
    let output = out.path().join("output.txt");
    let options = TotxtBuilder::new(src.path()).output(&output).build();
    totxt(&options).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("----\nmain.go\npackage main\n"));
    assert!(text.contains("----\nbuild/app.log\nnested\n"));
    assert!(!text.contains("noise"));
    assert!(!text.contains("----\n.totxtignore\n"));
}
#[test]
fn integration_ignore_file_is_a_record_unless_ignored() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_file(&src.path().join(".totxtignore"), b"*.log\n");
    write_file(&src.path().join("a.txt"), b"a");
    let output = out.path().join("output.txt");
    let options = TotxtBuilder::new(src.path())
        .output(&output)
        .preamble_file("")
        .build();
    totxt(&options).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.ends_with("----\n.totxtignore\n*.log\n\n----\na.txt\na\n--END--"));
}
#[test]
fn integration_ignore_file_override() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_file(&src.path().join("a.txt"), b"a");
    write_file(&src.path().join("b.md"), b"b");
    let ignore = out.path().join("custom-ignore");
    fs::write(&ignore, "*.md\n").unwrap();
    let output = out.path().join("output.txt");
    let options = TotxtBuilder::new(src.path())
        .output(&output)
        .ignore_file(&ignore)
        .preamble_file("")
        .build();
    let summary = totxt(&options).unwrap();
    assert_eq!(summary.files, 1);
    assert_eq!(summary.ignored, 1);
}
#[test]
fn integration_prune_skips_nested_files() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_file(&src.path().join(".totxtignore"), b".totxtignore\nnode_modules\n");
    write_file(&src.path().join("node_modules/dep/index.js"), b"module");
    write_file(&src.path().join("index.js"), b"app");
    let output = out.path().join("output.txt");
    let options = TotxtBuilder::new(src.path())
        .output(&output)
        .preamble_file("")
        .prune_ignored_dirs(true)
        .build();
    let summary = totxt(&options).unwrap();
    assert_eq!(summary.files, 1);
    assert!(!fs::read_to_string(&output).unwrap().contains("module"));
}
#[test]
fn integration_idempotent_output() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_file(&src.path().join("z/y/x.txt"), b"x");
    write_file(&src.path().join("m.rs"), b"fn m() {}");
    write_file(&src.path().join("a/b.bin"), &[0, 159, 146, 150]);
    let first = out.path().join("first.txt");
    let second = out.path().join("second.txt");
    for output in [&first, &second] {
        let options = TotxtBuilder::new(src.path())
            .output(output)
            .preamble_file("")
            .build();
        totxt(&options).unwrap();
    }
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
#[test]
fn integration_round_trip_reconstructs_tree() {
    let src = tempdir().unwrap();
    let mut files: BTreeMap<String, Vec<u8>> = BTreeMap::new();
    files.insert("README.md".into(), b"# readme\n".to_vec());
    files.insert("src/lib.rs".into(), b"pub fn f() {}\n".to_vec());
    files.insert("src/bin/main.rs".into(), b"fn main() {}".to_vec());
    files.insert("data/blob.bin".into(), vec![0, 1, 2, 255, b'\n']);
    files.insert("empty.txt".into(), Vec::new());
    for (path, content) in &files {
        write_file(&src.path().join(path), content);
    }
    let mut out = Vec::new();
    assemble(&mut out, b"PRE", src.path(), &IgnoreMatcher::empty(), false).unwrap();
    let mut rest = out.strip_prefix(b"PRE\n".as_slice()).unwrap();
    let mut seen: BTreeMap<String, Vec<u8>> = BTreeMap::new();
    while let Some(record) = rest.strip_prefix(b"----\n".as_slice()) {
        let newline = record.iter().position(|&b| b == b'\n').unwrap();
        let path = String::from_utf8(record[..newline].to_vec()).unwrap();
        let len = files[&path].len();
        let body = &record[newline + 1..];
        seen.insert(path, body[..len].to_vec());
        assert_eq!(body[len], b'\n');
        rest = &body[len + 1..];
    }
    assert_eq!(rest, END_MARKER.as_bytes());
    assert_eq!(seen, files);
}
#[test]
fn integration_missing_root_fails() {
    let out = tempdir().unwrap();
    let output = out.path().join("output.txt");
    let options = TotxtBuilder::new(out.path().join("does-not-exist"))
        .output(&output)
        .preamble_file("")
        .build();
    let err = totxt(&options).unwrap_err();
    assert!(matches!(err, TotxtError::Walk(_)));
    assert!(!fs::read_to_string(&output).unwrap().ends_with(END_MARKER));
}
#[test]
fn integration_missing_preamble_fails() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let options = TotxtBuilder::new(src.path())
        .output(out.path().join("output.txt"))
        .preamble_file(out.path().join("missing.txt"))
        .build();
    let err = totxt(&options).unwrap_err();
    assert!(matches!(err, TotxtError::Preamble { .. }));
}
#[test]
fn integration_output_create_failure() {
    let src = tempdir().unwrap();
    let options = TotxtBuilder::new(src.path())
        .output(src.path().join("no/such/dir/output.txt"))
        .preamble_file("")
        .build();
    let err = totxt(&options).unwrap_err();
    assert!(matches!(err, TotxtError::CreateOutput { .. }));
}
