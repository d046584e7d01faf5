use cpkit::core::assets;
use cpkit::core::config::{self, RunOverrides};
use cpkit::core::debug::DebugLog;
use cpkit::core::error::CpkitError;
use cpkit::core::reference;
use cpkit::core::runner::{self, Cases, RunOptions, RunSummary};
use cpkit::core::scaffold::{SCAFFOLD_FILES, ScaffoldOptions, scaffold_problem};
use cpkit::core::solve::Mode;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn run_str(opts: RunOptions, input: &str) -> (Result<RunSummary, CpkitError>, String) {
    let mut out = Vec::new();
    let mut debug = DebugLog::new(false, std::io::sink());
    let res = runner::run(opts, Cursor::new(input.as_bytes()), &mut out, &mut debug);
    (res, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn documented_examples_hold() {
    let sort = RunOptions::new(Mode::Sort);
    let sum = RunOptions::new(Mode::Sum);

    assert_eq!(run_str(sort, "3\n3 1 2\n").1, "1 2 3\n");
    assert_eq!(run_str(sort, "0\n\n").1, "\n");
    assert_eq!(run_str(sum, "1\n3\n4 5 6\n").1, "15\n");
    assert_eq!(run_str(sum, "2\n2\n1 1\n3\n0 0 0\n").1, "2\n0\n");
}

#[test]
fn sorting_sorted_output_is_identity() {
    let sort = RunOptions::new(Mode::Sort);
    let (_, first) = run_str(sort, "6\n5 -1 5 3 0 -9\n");
    let (_, second) = run_str(sort, &format!("6\n{}", first));
    assert_eq!(first, second);
}

#[test]
fn tokens_may_share_lines_with_counts() {
    let opts = RunOptions {
        mode: Mode::Sum,
        cases: Cases::Multi,
    };
    let (res, out) = run_str(opts, "2 3 1 2 3 1 100");
    assert_eq!(out, "6\n100\n");
    assert_eq!(res.expect("run ok"), RunSummary { cases: 2, values: 4 });
}

#[test]
fn config_file_drives_run_options() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join(config::CONFIG_FILE),
        "[run]\nmode = \"sum\"\ncases = \"single\"\ninput = \"data/in.txt\"\n",
    )
    .expect("write config");

    let (cfg, dir) = config::load_config(None, tmp.path()).expect("load config");
    let resolved = config::resolve(&cfg, dir.as_deref(), &RunOverrides::default(), None);
    assert_eq!(
        resolved.options,
        RunOptions {
            mode: Mode::Sum,
            cases: Cases::Single
        }
    );
    assert_eq!(resolved.input, Some(tmp.path().join("data/in.txt")));
}

#[test]
fn scaffolded_config_and_input_agree() {
    let tmp = tempdir().expect("tempdir");
    scaffold_problem(&ScaffoldOptions {
        target_dir: tmp.path().to_path_buf(),
        force: false,
        dry_run: false,
    })
    .expect("scaffold");
    for name in SCAFFOLD_FILES {
        assert!(tmp.path().join(name).exists());
    }

    let (cfg, dir) = config::load_config(None, tmp.path()).expect("load scaffolded config");
    let resolved = config::resolve(&cfg, dir.as_deref(), &RunOverrides::default(), None);
    let input = fs::read_to_string(resolved.input.expect("input configured")).expect("read input");
    let (res, out) = run_str(resolved.options, &input);
    assert!(res.is_ok());
    assert_eq!(out, "1 2 3\n");
}

#[test]
fn every_reference_topic_has_sections() {
    for topic in assets::list_docs() {
        let whole = reference::get_fragment(topic, None).expect("topic resolves");
        assert!(!whole.title.is_empty());
        let has_subsection = whole.content.lines().any(|l| l.starts_with("## "));
        assert!(has_subsection, "{} has no ## sections", topic);
    }
}

#[test]
fn reference_covers_algorithm_templates() {
    for anchor in [
        "fast-exponentiation",
        "sieve-of-eratosthenes",
        "bfs",
        "dfs",
        "prefix-sum",
        "binary-search",
    ] {
        let f = reference::get_fragment("algorithms", Some(anchor))
            .unwrap_or_else(|e| panic!("{}: {}", anchor, e));
        assert!(f.content.contains("```rust"), "{} has no code", anchor);
    }
}
