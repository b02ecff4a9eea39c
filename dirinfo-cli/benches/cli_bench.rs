use std::fs;
use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

fn dirinfo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dirinfo").expect("failed to locate dirinfo binary");
    cmd.env("HOME", home.path())
        .env("DIRINFO_PRESERVE_CASE", "1")
        .env("DIRINFO_WIDTH", "80")
        .env_remove("DIRINFO_CONFIG")
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

fn populated_dir(files: usize) -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for i in 0..files {
        fs::write(dir.path().join(format!("file_{i:04}.txt")), b"bench")
            .expect("failed to write fixture");
    }
    dir
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("dirinfo").expect("failed to locate dirinfo binary");
            let output = cmd.arg("--version").output().expect("failed to run dirinfo");
            black_box(output);
        });
    });
}

fn bench_cli_listing(c: &mut Criterion) {
    let home = tempfile::tempdir().expect("failed to create home dir");
    let mut group = c.benchmark_group("cli_listing");

    for count in [0usize, 10, 100] {
        let dir = populated_dir(count);
        let path = dir.path().to_str().unwrap().to_string();
        group.bench_function(format!("files_{count}"), |b| {
            b.iter(|| {
                let status = dirinfo(&home)
                    .arg(black_box(&path))
                    .status()
                    .expect("failed to run dirinfo");
                black_box(status);
            });
        });
    }

    group.finish();
}

fn bench_cli_rejections(c: &mut Criterion) {
    let home = tempfile::tempdir().expect("failed to create home dir");
    let mut group = c.benchmark_group("cli_rejections");

    group.bench_function("invalid_syntax", |b| {
        b.iter(|| {
            let status = dirinfo(&home)
                .arg(black_box("relative/path"))
                .status()
                .expect("failed to run dirinfo");
            black_box(status);
        });
    });

    group.bench_function("missing_directory", |b| {
        b.iter(|| {
            let status = dirinfo(&home)
                .arg(black_box("/definitely/not/here"))
                .status()
                .expect("failed to run dirinfo");
            black_box(status);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cli_startup,
    bench_cli_listing,
    bench_cli_rejections
);
criterion_main!(benches);
