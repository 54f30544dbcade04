use assert_cmd::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn render_writes_one_png_per_clock() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("horologe")?;
    cmd.arg("render").arg(demo("wall.hml")).arg("--out").arg(dir.path()).arg("--at").arg("09:05:03");
    cmd.assert().success();

    for name in ["lobby.png", "desk.png", "tokyo.png"] {
        let path = dir.path().join(name);
        assert!(path.exists(), "missing {name}");
        assert_eq!(&fs::read(&path)?[1..4], b"PNG");
    }
    assert!(!dir.path().join("poster.png").exists());
    Ok(())
}

#[test]
fn fonts_put_text_into_the_frames() -> Result<(), Box<dyn std::error::Error>> {
    let font = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../horologe-engine/tests/fonts/DejaVuSansMono.ttf");
    let plain = tempdir()?;
    let lettered = tempdir()?;

    for (dir, with_font) in [(&plain, false), (&lettered, true)] {
        let mut cmd = Command::cargo_bin("horologe")?;
        cmd.args(["--marker", "wide", "render"]).arg(demo("wall.hml")).arg("-o").arg(dir.path());
        cmd.args(["--at", "09:05:03"]);
        if with_font {
            cmd.arg("--font").arg(format!("mono={}", font.display()));
        }
        cmd.assert().success();
    }

    let without = fs::read(plain.path().join("desk.png"))?;
    let with = fs::read(lettered.path().join("desk.png"))?;
    assert_ne!(without, with, "the digital readout should change the frame");
    Ok(())
}

#[test]
fn marker_selects_other_surfaces() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("horologe")?;
    cmd.arg("--marker").arg("wide").arg("render").arg(demo("wall.hml")).arg("-o").arg(dir.path());
    cmd.assert().success();

    let mut names: Vec<_> = fs::read_dir(dir.path())?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    names.sort();
    assert_eq!(names, vec!["desk.png"]);
    Ok(())
}

#[test]
fn run_exports_every_tick() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let doc = dir.path().join("one.hml");
    fs::write(&doc, r#"Canvas "solo" { class: clockClass  width: 64  height: 64 }"#)?;
    let out = dir.path().join("frames");

    let mut cmd = Command::cargo_bin("horologe")?;
    cmd.arg("run")
        .arg(&doc)
        .arg("--interval")
        .arg("20")
        .arg("--ticks")
        .arg("3")
        .arg("--out")
        .arg(&out);
    cmd.assert().success();

    for tick in 1..=3 {
        assert!(out.join(format!("solo-{tick:03}.png")).exists());
    }
    assert!(!out.join("solo-004.png").exists());
    Ok(())
}

#[test]
fn parse_errors_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let doc = dir.path().join("broken.hml");
    fs::write(&doc, "Page {\n  Canvas { width: }\n")?;

    let mut cmd = Command::cargo_bin("horologe")?;
    let output = cmd.arg("render").arg(&doc).arg("--out").arg(dir.path()).output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hml parse error at 2:"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn missing_document_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("horologe")?;
    cmd.arg("render").arg("does/not/exist.hml");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn bad_time_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("horologe")?;
    cmd.arg("render").arg(demo("wall.hml")).arg("--at").arg("25:00:00");
    cmd.assert().failure();
    Ok(())
}
