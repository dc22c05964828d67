use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn comicctl(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("comicctl").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home).env("NO_COLOR", "1");
    cmd
}

/// comics root with `<id>/images/*` plus optional text and video files
fn comic_tree(id: &str, images: &[&str], text: &[&str], video: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (sub, files) in [("images", images), ("text", text), ("video", video)] {
        if sub != "images" && files.is_empty() {
            continue;
        }
        let dir = temp.path().join("comics").join(id).join(sub);
        fs::create_dir_all(&dir).unwrap();
        for f in files {
            fs::write(dir.join(f), b"").unwrap();
        }
    }
    temp
}

fn create_cmd(temp: &TempDir, output: &Path) -> Command {
    let mut cmd = comicctl(temp.path());
    cmd.args(["create", "--comics-root"])
        .arg(temp.path().join("comics"))
        .arg("--output")
        .arg(output);
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("comicctl").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("rename"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("comicctl").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("comicctl"));
}

#[test]
fn test_rename_requires_directory_argument() {
    let mut cmd = Command::cargo_bin("comicctl").unwrap();
    cmd.arg("rename").assert().failure();
}

#[test]
fn test_rename_confirmed() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("panels");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("b.txt"), b"b").unwrap();
    fs::write(dir.join("a.txt"), b"a").unwrap();

    comicctl(temp.path())
        .arg("rename")
        .arg(&dir)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt successfully renamed to 1.txt"))
        .stdout(predicate::str::contains("All files successfully renamed"));

    assert_eq!(fs::read(dir.join("1.txt")).unwrap(), b"a");
    assert_eq!(fs::read(dir.join("2.txt")).unwrap(), b"b");
    assert!(!dir.join("a.txt").exists());
}

#[test]
fn test_rename_declined_leaves_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b.txt"), b"b").unwrap();

    comicctl(temp.path())
        .arg("rename")
        .arg(temp.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("see you next time"));

    assert!(temp.path().join("b.txt").exists());
}

#[test]
fn test_rename_yes_flag_skips_prompt() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("1.png"), b"").unwrap();
    fs::write(temp.path().join("page.png"), b"").unwrap();

    comicctl(temp.path())
        .args(["rename", "--yes"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File 1.png already has the correct name."));

    assert!(temp.path().join("2.png").exists());
}

#[test]
fn test_rename_missing_directory_exits_zero() {
    let temp = TempDir::new().unwrap();
    comicctl(temp.path())
        .arg("rename")
        .arg(temp.path().join("nope"))
        .assert()
        .success()
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn test_create_writes_store() {
    let temp = comic_tree(
        "moon",
        &["10.png", "2.png", "1.png"],
        &["text_2.png"],
        &["a.mp4", "a.m3u8", "a.ts"],
    );
    let output = temp.path().join("comics.json");

    create_cmd(&temp, &output)
        .write_stdin("Moonlight\nmissing\nmoon\ny\ny\nn\nbounce\nslide\nJo\nwww.jo.art\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please choose fade or slide"))
        .stdout(predicate::str::contains("Successfully saved"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert!(value.get("created").is_some());

    let comic = &value["comics"][0];
    assert_eq!(comic["id"], "moon");
    assert_eq!(comic["name"], "Moonlight");
    assert_eq!(comic["panelsCount"], 3);
    assert_eq!(comic["panels"][0]["image"], "1.png");
    assert_eq!(comic["panels"][1]["image"], "2.png");
    assert_eq!(comic["panels"][1]["text"], "text_2.png");
    assert_eq!(comic["panels"][2]["image"], "10.png");
    assert_eq!(comic["video"][0]["type"], "application/x-mpegURL");
    assert_eq!(comic["video"][1]["type"], "video/mp4");
    assert!(comic.get("vtt").is_none());
    assert_eq!(comic["effect"], "slide");
    assert_eq!(comic["credits"]["artist"], "Jo");
    assert_eq!(comic["credits"]["website"], "www.jo.art");
}

#[test]
fn test_create_twice_same_id_appends() {
    let temp = comic_tree("moon", &["1.png"], &[], &[]);
    let output = temp.path().join("comics.json");
    let answers = "M\nmoon\nn\nn\nfade\n\n\n";

    create_cmd(&temp, &output).write_stdin(answers).assert().success();
    create_cmd(&temp, &output)
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("already has a comic with id"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["comics"].as_array().unwrap().len(), 2);
    assert!(value.get("edited").is_some());
}

#[test]
fn test_create_missing_text_dir_exits_one() {
    let temp = comic_tree("moon", &["1.png"], &[], &[]);
    let output = temp.path().join("comics.json");

    create_cmd(&temp, &output)
        .write_stdin("M\nmoon\ny\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("directory called text"));

    assert!(!output.exists());
}

#[test]
fn test_create_image_without_number_exits_two() {
    let temp = comic_tree("moon", &["1.png", "cover.png", "x3.png"], &["t3.png"], &[]);
    let output = temp.path().join("comics.json");

    create_cmd(&temp, &output)
        .write_stdin("M\nmoon\ny\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cover.png"));
}

#[test]
fn test_create_write_failure_exits_three() {
    let temp = comic_tree("moon", &["1.png"], &[], &[]);
    let output = temp.path().join("no-such-dir").join("comics.json");

    create_cmd(&temp, &output)
        .write_stdin("M\nmoon\nn\nn\nfade\n\n\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Couldn't create or edit"))
        .stderr(predicate::str::contains("simply copy the data"));
}

#[test]
fn test_create_corrupt_store_exits_four() {
    let temp = comic_tree("moon", &["1.png"], &[], &[]);
    let output = temp.path().join("comics.json");
    fs::write(&output, "{oops").unwrap();

    create_cmd(&temp, &output)
        .write_stdin("M\nmoon\nn\nn\nfade\n\n\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Couldn't parse"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "{oops");
}

#[test]
fn test_create_closed_input_fails() {
    let temp = comic_tree("moon", &["1.png"], &[], &[]);
    let output = temp.path().join("comics.json");

    create_cmd(&temp, &output)
        .write_stdin("M\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input closed"));
}

#[test]
fn test_create_keeps_existing_entries_as_written() {
    let temp = comic_tree("moon", &["1.png"], &[], &[]);
    let output = temp.path().join("comics.json");
    let legacy = serde_json::json!({
        "id": "sun",
        "name": "Sun",
        "panels": [{"image": "1.png", "text": ""}],
        "video": "",
        "effect": "zoom",
        "cover": "cover.jpg",
        "published": true
    });
    fs::write(
        &output,
        serde_json::to_string(&serde_json::json!({
            "created": "2020-01-01T00:00:00.000Z",
            "comics": [legacy.clone()]
        }))
        .unwrap(),
    )
    .unwrap();

    create_cmd(&temp, &output)
        .write_stdin("M\nmoon\nn\nn\nfade\n\n\n")
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["comics"][0], legacy);
    assert_eq!(value["comics"][1]["id"], "moon");
    assert_eq!(value["created"], "2020-01-01T00:00:00.000Z");
}

#[test]
fn test_rename_shifts_numbered_files_up() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("panels");
    fs::create_dir(&dir).unwrap();
    for (name, body) in [("0.png", "zero"), ("1.png", "one"), ("2.png", "two")] {
        fs::write(dir.join(name), body).unwrap();
    }

    comicctl(temp.path())
        .args(["rename", "--yes"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("All files successfully renamed"));

    assert_eq!(fs::read_to_string(dir.join("1.png")).unwrap(), "zero");
    assert_eq!(fs::read_to_string(dir.join("2.png")).unwrap(), "one");
    assert_eq!(fs::read_to_string(dir.join("3.png")).unwrap(), "two");
    assert!(!dir.join("0.png").exists());
}
