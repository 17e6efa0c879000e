use crate::{file_names, write_rgb_image, write_rgba_image, Workdir};
use appicons_core::config::Config;
use assert_cmd::Command;

fn appicons() -> Command {
    let mut cmd = Command::cargo_bin("test-appicons").unwrap();
    cmd.env_remove("APPICONS_CONFIG")
        .env_remove("APPICONS_ICONUTIL");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn should_generate_icons_for_single_app() {
    let workdir = Workdir::new().unwrap();
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("logo.png");
    write_rgb_image(&source);
    let root = tmp.path().join("icons");

    let output = appicons()
        .arg("--source")
        .arg(&source)
        .arg("--output")
        .arg(&root)
        .arg("--iconutil")
        .arg(workdir.bin())
        .arg("generate")
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("Icon generation complete! (1/1 apps)"));
    assert_eq!(
        file_names(&root),
        vec!["appicon.png", "darwin", "linux", "windows"]
    );
    assert_eq!(file_names(&root.join("darwin")), vec!["icon.icns"]);
    assert_eq!(
        image::open(root.join("appicon.png")).unwrap().color(),
        image::ColorType::Rgba8
    );
}

#[test]
fn should_generate_client_and_server_icons_by_default() {
    let tmp = tempfile::TempDir::new().unwrap();
    let icons = tmp.path().join("icons");
    std::fs::create_dir(&icons).unwrap();
    write_rgba_image(&icons.join("robo-stream-client.png"));
    write_rgba_image(&icons.join("robo-stream-server.png"));
    let workdir = Workdir::new().unwrap();

    let output = appicons()
        .current_dir(&icons)
        .arg("--iconutil")
        .arg(workdir.bin())
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Icon generation complete! (2/2 apps)"));
    assert!(stdout.contains("CLIENT:"));
    assert!(stdout.contains("SERVER:"));
    for app in ["client", "server"] {
        let root = tmp.path().join(app).join("icons");
        assert!(root.join("appicon.png").is_file());
        assert!(root.join("linux").join("icon.png").is_file());
        assert!(root.join("windows").join("icon.ico").is_file());
        assert!(root.join("darwin").join("icon.icns").is_file());
    }
}

#[test]
fn should_fail_without_writing_if_source_is_missing() {
    let tmp = tempfile::TempDir::new().unwrap();
    let root = tmp.path().join("icons");

    let output = appicons()
        .arg("--source")
        .arg(tmp.path().join("missing.png"))
        .arg("--output")
        .arg(&root)
        .assert()
        .failure()
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("icon files not found"));
    assert!(!root.exists());
}

#[test]
fn should_not_process_any_app_if_one_source_is_missing() {
    let tmp = tempfile::TempDir::new().unwrap();
    let icons = tmp.path().join("icons");
    std::fs::create_dir(&icons).unwrap();
    write_rgba_image(&icons.join("robo-stream-client.png"));

    appicons().current_dir(&icons).assert().failure();

    assert!(!tmp.path().join("client").exists());
    assert!(!tmp.path().join("server").exists());
}

#[test]
fn should_fail_for_undecodable_source_but_process_other_apps() {
    let tmp = tempfile::TempDir::new().unwrap();
    let broken = tmp.path().join("broken.png");
    std::fs::write(&broken, b"not an image").unwrap();
    let good = tmp.path().join("good.png");
    write_rgb_image(&good);
    let config_file = tmp.path().join("appicons.toml");
    std::fs::write(
        &config_file,
        format!(
            r#"
            [[app]]
            name = "Broken"
            source = {broken:?}
            destination = {broken_out:?}

            [[app]]
            name = "Good"
            source = {good:?}
            destination = {good_out:?}
            "#,
            broken = broken.to_str().unwrap(),
            broken_out = tmp.path().join("broken-icons").to_str().unwrap(),
            good = good.to_str().unwrap(),
            good_out = tmp.path().join("good-icons").to_str().unwrap(),
        ),
    )
    .unwrap();

    let output = appicons()
        .arg("--config")
        .arg(&config_file)
        .assert()
        .failure()
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("Icon generation complete! (1/2 apps)"));
    assert!(!tmp.path().join("broken-icons").exists());
    assert!(tmp.path().join("good-icons").join("appicon.png").is_file());
}

#[test]
fn should_keep_iconset_if_iconutil_fails() {
    let workdir = Workdir::new()
        .unwrap()
        .with_exit_status(1)
        .unwrap()
        .with_stderr("bad iconset")
        .unwrap();
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("logo.png");
    write_rgba_image(&source);
    let root = tmp.path().join("icons");

    let output = appicons()
        .arg("--source")
        .arg(&source)
        .arg("--output")
        .arg(&root)
        .arg("--iconutil")
        .arg(workdir.bin())
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("iconutil failed: bad iconset"));
    assert_eq!(file_names(&root.join("darwin")), vec!["icon.iconset"]);
    assert_eq!(file_names(&root.join("darwin").join("icon.iconset")).len(), 10);
}

#[cfg(not(target_os = "macos"))]
#[test]
fn should_skip_bundling_outside_macos() {
    let tmp = tempfile::TempDir::new().unwrap();
    let source = tmp.path().join("logo.png");
    write_rgba_image(&source);
    let root = tmp.path().join("icons");

    let output = appicons()
        .arg("--source")
        .arg(&source)
        .arg("--output")
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("requires macOS"));
    assert_eq!(file_names(&root.join("darwin")), vec!["icon.iconset"]);
}

#[test]
fn should_print_plan_without_writing() {
    let tmp = tempfile::TempDir::new().unwrap();
    let root = tmp.path().join("icons");

    let output = appicons()
        .arg("--source")
        .arg(tmp.path().join("logo.png"))
        .arg("--output")
        .arg(&root)
        .arg("plan")
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert!(stdout.contains("icon_512x512@2x.png (1024x1024 PNG)"));
    assert!(stdout.contains("ICO with 16, 32, 48, 64, 128, 256"));
    assert!(!root.exists());
}

#[test]
fn should_print_active_config() {
    let output = appicons()
        .arg("config")
        .assert()
        .success()
        .get_output()
        .clone();

    let config = Config::parse(&stdout_of(&output)).unwrap();
    assert_eq!(config, Config::dual());
}

#[test]
fn should_reject_invalid_config_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config_file = tmp.path().join("appicons.toml");
    std::fs::write(&config_file, "[[app]]\nname = 1\n").unwrap();

    appicons()
        .arg("--config")
        .arg(&config_file)
        .arg("config")
        .assert()
        .failure();
}

#[test]
fn should_print_version() {
    let output = appicons()
        .arg("version")
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(stdout_of(&output).starts_with("appicons: "));
}
