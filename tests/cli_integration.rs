use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

const FALLBACK_MESSAGE: &str = "打卡成功！祝你有個充實的一天。";

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn checkin_bin() -> String {
    std::env::var("CARGO_BIN_EXE_checkin").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("checkin.exe");
        } else {
            path.push("checkin");
        }
        path.to_string_lossy().into_owned()
    })
}

/// Command isolated from the caller's home, config, and credentials
fn checkin_command(home: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(checkin_bin());
    cmd.args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn run_checkin(home: &Path, args: &[&str]) -> Output {
    checkin_command(home, args).output().expect("run checkin")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "invalid json ({e}): {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

#[test]
fn submit_json_reports_success_with_fallback_message() {
    let home = tempfile::tempdir().expect("temp home");
    let store = home.path().join("checkin.db");
    let store = store.to_str().unwrap();

    let output = run_checkin(
        home.path(),
        &["submit", "a@b.com", "-j", "-O", "--store", store, "--timezone", "UTC"],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = stdout_json(&output);
    assert_eq!(json["status"], "success");
    assert_eq!(json["record"]["email"], "a@b.com");
    assert!(!json["record"]["id"].as_str().unwrap().is_empty());
    assert!(json["record"]["timestamp"].as_str().unwrap().contains('/'));
    assert_eq!(json["message"], FALLBACK_MESSAGE);
    assert_eq!(json["history"].as_array().unwrap().len(), 1);
}

#[test]
fn invalid_email_is_rejected_without_touching_history() {
    let home = tempfile::tempdir().expect("temp home");
    let store = home.path().join("checkin.db");
    let store = store.to_str().unwrap();

    let output = run_checkin(home.path(), &["submit", "not-an-email", "-O", "--store", store]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("請輸入有效的電子郵件"));

    let output = run_checkin(home.path(), &["history", "-j", "--store", store]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), serde_json::json!([]));
}

#[test]
fn invalid_email_json_output() {
    let home = tempfile::tempdir().expect("temp home");
    let output = run_checkin(home.path(), &["submit", "", "-j", "-O", "--ephemeral"]);
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["status"], "invalid");
}

#[test]
fn history_keeps_five_newest_across_runs() {
    let home = tempfile::tempdir().expect("temp home");
    let store = home.path().join("checkin.db");
    let store = store.to_str().unwrap();

    for n in 1..=6 {
        let email = format!("s{n}@ntnu.edu.tw");
        let output = run_checkin(home.path(), &["submit", &email, "-O", "--store", store]);
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let output = run_checkin(home.path(), &["history", "-j", "--store", store]);
    let json = stdout_json(&output);
    let emails: Vec<_> = json
        .as_array()
        .expect("array output")
        .iter()
        .map(|r| r["email"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        emails,
        vec![
            "s6@ntnu.edu.tw",
            "s5@ntnu.edu.tw",
            "s4@ntnu.edu.tw",
            "s3@ntnu.edu.tw",
            "s2@ntnu.edu.tw",
        ]
    );

    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn default_store_lives_under_home() {
    let home = tempfile::tempdir().expect("temp home");
    let output = run_checkin(home.path(), &["submit", "a@b.com", "-O"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        home.path()
            .join(".local/share/checkin/checkin.db")
            .exists()
    );
}

#[test]
fn empty_history_table_message() {
    let home = tempfile::tempdir().expect("temp home");
    let output = run_checkin(home.path(), &["history", "--ephemeral"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("目前沒有打卡紀錄。"));
}

#[test]
fn setup_script_uses_configured_emails() {
    let home = tempfile::tempdir().expect("temp home");
    write_file(
        &home.path().join(".checkin.toml"),
        r#"
admin_email = "office@example.edu"
contact_email = "help@example.edu"
"#,
    );

    let output = run_checkin(home.path(), &["setup", "--script"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("var adminEmail = \"office@example.edu\";"));
    assert!(stdout.contains("help@example.edu"));

    let output = run_checkin(home.path(), &["setup", "--no-color"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("尚未連動發信功能"));
}

#[test]
fn unreachable_services_still_reach_success() {
    let home = tempfile::tempdir().expect("temp home");
    write_file(
        &home.path().join(".config").join("checkin").join("config.toml"),
        r#"
webhook_url = "http://127.0.0.1:9/exec"
api_base = "http://127.0.0.1:9"
"#,
    );

    let output = checkin_command(home.path(), &["submit", "a@b.com", "-j", "--ephemeral"])
        .env("GEMINI_API_KEY", "test-key")
        .output()
        .expect("run checkin");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json = stdout_json(&output);
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], FALLBACK_MESSAGE);
}

#[test]
fn form_reads_one_email_per_line() {
    let home = tempfile::tempdir().expect("temp home");
    write_file(&home.path().join(".checkin.toml"), "reset_delay_secs = 0\n");
    let store = home.path().join("checkin.db");

    let mut child = checkin_command(
        home.path(),
        &["form", "-O", "--no-color", "--store", store.to_str().unwrap()],
    )
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .expect("spawn checkin");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"oops\na@b.com\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait checkin");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("請輸入有效的電子郵件"));
    assert!(stdout.contains("已經把資訊寄給你了"));

    let output = run_checkin(home.path(), &["history", "-j", "--store", store.to_str().unwrap()]);
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 1);
}

#[test]
fn history_does_not_create_store() {
    let home = tempfile::tempdir().expect("temp home");
    let output = run_checkin(home.path(), &["history", "-j"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), serde_json::json!([]));
    assert!(!home.path().join(".local/share/checkin").exists());
}
