//! Multi-input runs through the facade crate

use std::fs;

use katgen::api::Error;
use katgen::config::TranscodeConfig;
use katgen::pipeline::{detect_format, InputFormat, Pipeline, RunOutcome};
use katgen_tests::fixtures::{self, data_path, AES256_VAR_KEY, AES256_VAR_PT, CHACHA20_CORPUS};

fn aes256_pipeline() -> Pipeline {
    Pipeline::new(TranscodeConfig::default().with_schema_preset("aes256")).unwrap()
}

#[test]
fn sample_files_are_detected() {
    assert_eq!(
        detect_format(&fixtures::load(AES256_VAR_PT)),
        InputFormat::VarPlaintext
    );
    assert_eq!(
        detect_format(&fixtures::load(AES256_VAR_KEY)),
        InputFormat::VarKey
    );
    assert_eq!(
        detect_format(&fixtures::load(CHACHA20_CORPUS)),
        InputFormat::Suite
    );
}

#[test]
fn records_concatenate_in_input_order() {
    katgen::logging::init_for_tests();
    let report = aes256_pipeline()
        .run(
            &[data_path(AES256_VAR_KEY), data_path(AES256_VAR_PT)],
            InputFormat::Auto,
        )
        .unwrap();

    assert_eq!(report.inputs.len(), 2);
    assert_eq!(report.inputs[0].format, InputFormat::VarKey);
    assert_eq!(report.inputs[1].format, InputFormat::VarPlaintext);
    assert_eq!(report.total(), 6);
    assert_eq!(report.outcome(), RunOutcome::Produced(6));
    // var-key records first: key varies, plaintext is zero
    assert_eq!(report.records()[0].key()[0], 0x80);
    assert_eq!(report.records()[3].plaintext()[0], 0x80);
}

#[test]
fn skipped_suites_are_reported_per_input() {
    let pipeline = Pipeline::new(TranscodeConfig::default()).unwrap();
    let report = pipeline
        .run(&[data_path(CHACHA20_CORPUS)], InputFormat::Suite)
        .unwrap();

    assert_eq!(report.inputs[0].count, 3);
    let skipped: Vec<&str> = report.skipped().map(|s| s.name.as_str()).collect();
    assert_eq!(skipped, vec!["Cipher Test Vector #3"]);
}

#[test]
fn writes_header_to_destination() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("chacha20_test_vectors.h");

    let pipeline = Pipeline::new(TranscodeConfig::default()).unwrap();
    let report = pipeline
        .run(&[data_path(CHACHA20_CORPUS)], InputFormat::Auto)
        .unwrap();
    pipeline.write(&report, &dest).unwrap();

    let written = fs::read_to_string(&dest).unwrap();
    assert_eq!(written, pipeline.render(&report).unwrap());
    assert!(written.contains("num_chacha20_test_vectors = 3;"));
}

#[test]
fn no_candidates_is_empty_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("empty.c");
    fs::write(&src, "int main(void) { return 0; }\n").unwrap();

    let report = Pipeline::new(TranscodeConfig::default())
        .unwrap()
        .run(&[&src], InputFormat::Auto)
        .unwrap();
    assert_eq!(report.outcome(), RunOutcome::Empty);
    assert_eq!(report.inputs[0].count, 0);
}

#[test]
fn missing_source_aborts_run() {
    let err = aes256_pipeline()
        .run(
            &[data_path(AES256_VAR_PT), data_path("no_such_file.txt")],
            InputFormat::Auto,
        )
        .unwrap_err();
    match err {
        Error::Resource { path, .. } => assert!(path.ends_with("no_such_file.txt")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn forced_format_overrides_detection() {
    let err = aes256_pipeline()
        .run(&[data_path(AES256_VAR_PT)], InputFormat::VarKey)
        .unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn config_file_drives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("katgen.toml");
    fs::write(
        &config_path,
        "[suite]\ninclude = \"Cipher Test Vector\"\nexclude = \"\"\n",
    )
    .unwrap();

    let config = TranscodeConfig::load(&config_path).unwrap();
    let report = Pipeline::new(config)
        .unwrap()
        .run(&[data_path(CHACHA20_CORPUS)], InputFormat::Auto)
        .unwrap();
    assert_eq!(report.total(), 4);
}
