use std::{path::PathBuf, process::Command};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn cli_flags_write_a_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("flags.png");
    let _ = std::fs::remove_file(&out);

    let status = Command::new(env!("CARGO_BIN_EXE_covergen"))
        .args(["--title", "Rust 速查手册", "--template", "minimal", "--color", "cool"])
        .arg("--output")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC);
}

#[test]
fn cli_spec_json_writes_a_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("spec.png");
    let spec_path = dir.join("cover.json");
    let _ = std::fs::remove_file(&out);

    let mut spec = covergen::CoverSpec::new("列表封面");
    spec.template = "list".to_string();
    spec.color = "green".to_string();
    spec.items = Some(vec!["第一".to_string(), "第二".to_string()]);
    spec.output = Some(out.clone());
    std::fs::write(&spec_path, serde_json::to_string_pretty(&spec).unwrap()).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_covergen"))
        .arg("--spec")
        .arg(&spec_path)
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC);
}

#[test]
fn cli_rejects_unknown_template_without_writing() {
    let output = Command::new(env!("CARGO_BIN_EXE_covergen"))
        .args(["--title", "x", "--template", "vaporwave"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown template"), "stderr: {stderr}");
}

#[test]
fn cli_requires_a_title_or_spec() {
    let output = Command::new(env!("CARGO_BIN_EXE_covergen")).output().unwrap();
    assert!(!output.status.success());
}
