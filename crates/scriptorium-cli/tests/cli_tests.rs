//! End-to-end tests for the stage commands.

use chrono::NaiveDate;
use clap::Parser;
use scriptorium_cli::{run, Cli, CliError};
use scriptorium_domain::{Article, ArticleId, ArticleMeta};
use scriptorium_store::ArticleStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PRIMARY: &str = "кот\tкот\tS,муж,од=им,ед\nспит\tспать\tV,несов=непрош,ед\n";
const SECONDARY: &str = "кот\t\tNOUN,anim,masc sing,nomn\nспит\t\tVERB,impf sing,3per\n";

fn write_corpus(root: &Path, texts: &[&str]) {
    let date = NaiveDate::from_ymd_opt(2022, 5, 17)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut store = ArticleStore::create(root).unwrap();
    for (index, text) in texts.iter().enumerate() {
        let article = Article::new(ArticleId::new(index as u32 + 1).unwrap());
        let meta = ArticleMeta::new("Автор", "Статья", vec!["тема".to_string()], date);
        store.save_raw(&article, text, &meta).unwrap();
    }
}

fn write_config(dir: &Path) -> std::path::PathBuf {
    fs::write(dir.join("primary.tsv"), PRIMARY).unwrap();
    fs::write(dir.join("secondary.tsv"), SECONDARY).unwrap();

    let config = format!(
        "assets_path = {:?}\n\n\
         [analyzers.primary]\nbackend = \"lexicon\"\npath = {:?}\n\n\
         [analyzers.secondary]\nbackend = \"lexicon\"\npath = {:?}\n",
        dir.join("articles"),
        dir.join("primary.tsv"),
        dir.join("secondary.tsv"),
    );
    let path = dir.join("scriptorium.toml");
    fs::write(&path, config).unwrap();
    path
}

fn run_command(config: &Path, args: &[&str]) -> Result<(), CliError> {
    let config = config.to_str().unwrap();
    let mut argv = vec!["scriptorium", "--no-color", "--config", config];
    argv.extend_from_slice(args);
    run(Cli::parse_from(argv))
}

#[test]
fn test_process_then_count() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let assets = dir.path().join("articles");
    write_corpus(&assets, &["Кот спит.", "Кот"]);

    run_command(&config, &["validate"]).unwrap();
    run_command(&config, &["process", "-j", "2"]).unwrap();

    assert_eq!(
        fs::read_to_string(assets.join("1_cleaned.txt")).unwrap(),
        "кот спит"
    );
    assert_eq!(
        fs::read_to_string(assets.join("1_multiple_tagged.txt")).unwrap(),
        "кот<NOUN,anim,masc sing,nomn>(S,муж,од=им,ед) спать<VERB,impf sing,3per>(V,несов=непрош,ед)"
    );

    run_command(&config, &["pos-frequency"]).unwrap();

    let meta = fs::read_to_string(assets.join("1_meta.json")).unwrap();
    assert!(meta.contains("\"pos_frequencies\""));
    assert!(meta.contains("\"NOUN\":1"));
    assert!(meta.contains("\"VERB\":1"));
    assert!(assets.join("1_image.svg").is_file());
    assert!(assets.join("2_image.svg").is_file());
}

#[test]
fn test_pos_frequency_before_processing_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let assets = dir.path().join("articles");
    write_corpus(&assets, &["Кот спит."]);

    let result = run_command(&config, &["pos-frequency"]);
    assert!(matches!(result, Err(CliError::Pipeline(_))));
    assert!(!assets.join("1_image.svg").exists());
}

#[test]
fn test_missing_corpus_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let result = run_command(&config, &["validate"]);
    assert!(matches!(result, Err(CliError::Dataset(_))));
}

#[test]
fn test_assets_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let elsewhere = dir.path().join("elsewhere");
    write_corpus(&elsewhere, &["Кот"]);

    run_command(
        &config,
        &["--assets", elsewhere.to_str().unwrap(), "process"],
    )
    .unwrap();
    assert!(elsewhere.join("1_single_tagged.txt").is_file());
}
