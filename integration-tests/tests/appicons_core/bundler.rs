use crate::Workdir;
use appicons_core::bundler::{BundleOutcome, IconBundler, Iconutil};

#[test]
fn should_run_iconutil_with_iconset_and_output() {
    let workdir = Workdir::new().unwrap();
    let iconset = workdir.path().join("icon.iconset");
    let icns = workdir.path().join("icon.icns");
    std::fs::create_dir(&iconset).unwrap();

    let outcome = Iconutil::new(workdir.bin()).bundle(&iconset, &icns);

    assert_eq!(outcome, BundleOutcome::Bundled);
    assert!(icns.is_file());
    workdir.args().unwrap().assert_args(&[
        "-c",
        "icns",
        iconset.to_str().unwrap(),
        "-o",
        icns.to_str().unwrap(),
    ]);
}

#[test]
fn should_report_stderr_of_failed_iconutil() {
    let workdir = Workdir::new()
        .unwrap()
        .with_exit_status(1)
        .unwrap()
        .with_stderr("icon.iconset:Invalid Iconset.\n")
        .unwrap();
    let icns = workdir.path().join("icon.icns");

    let outcome = Iconutil::new(workdir.bin()).bundle(&workdir.path().join("icon.iconset"), &icns);

    assert_eq!(
        outcome,
        BundleOutcome::Failed("iconutil failed: icon.iconset:Invalid Iconset.".to_owned())
    );
    assert!(!icns.exists());
}

#[test]
fn should_report_exit_status_of_silently_failed_iconutil() {
    let workdir = Workdir::new().unwrap().with_exit_status(3).unwrap();

    let outcome = Iconutil::new(workdir.bin()).bundle(
        &workdir.path().join("icon.iconset"),
        &workdir.path().join("icon.icns"),
    );

    assert_eq!(
        outcome,
        BundleOutcome::Failed("iconutil failed with exit status 3".to_owned())
    );
}
